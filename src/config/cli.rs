use crate::config::routes::RoutesConfig;
use crate::adapters::form::{MapForm, TomlForm};
use crate::core::Operation;
use crate::domain::model::fields;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "ballot-bridge")]
#[command(about = "Submit voting forms to a ballot service and show its JSON replies")]
pub struct CliConfig {
    #[arg(long, help = "Service base URL, overrides the routes file")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML file with base_url and [routes]")]
    pub routes: Option<String>,

    #[arg(long, help = "TOML file with a [fields] table of form inputs")]
    pub form: Option<String>,

    #[arg(long, help = "Write result containers to this directory instead of stdout")]
    pub output_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a user
    AddUser {
        #[arg(long)]
        user_name: Option<String>,
    },
    /// Create a ballot; options are comma separated
    AddBallot {
        #[arg(long)]
        election_id: Option<String>,
        #[arg(long)]
        options: Option<String>,
        #[arg(long)]
        start_time: Option<String>,
        #[arg(long)]
        end_time: Option<String>,
    },
    /// Cast a vote
    CastVote {
        #[arg(long)]
        voter_id: Option<String>,
        #[arg(long)]
        candidate: Option<String>,
        #[arg(long)]
        vote_election_id: Option<String>,
    },
    /// Fetch and print the results of an election
    CalculateResults {
        #[arg(long)]
        result_election_id: Option<String>,
    },
    /// Run several operations at once against the same form
    Batch {
        #[arg(required = true, value_enum)]
        operations: Vec<OperationArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    AddUser,
    AddBallot,
    CastVote,
    CalculateResults,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::AddUser => Operation::AddUser,
            OperationArg::AddBallot => Operation::AddBallot,
            OperationArg::CastVote => Operation::CastVote,
            OperationArg::CalculateResults => Operation::CalculateResults,
        }
    }
}

impl Command {
    pub fn operations(&self) -> Vec<Operation> {
        match self {
            Command::AddUser { .. } => vec![Operation::AddUser],
            Command::AddBallot { .. } => vec![Operation::AddBallot],
            Command::CastVote { .. } => vec![Operation::CastVote],
            Command::CalculateResults { .. } => vec![Operation::CalculateResults],
            Command::Batch { operations } => {
                operations.iter().copied().map(Operation::from).collect()
            }
        }
    }

    /// Field values given as flags.
    pub fn field_overrides(&self) -> MapForm {
        let pairs: Vec<(&str, &Option<String>)> = match self {
            Command::AddUser { user_name } => vec![(fields::USER_NAME, user_name)],
            Command::AddBallot {
                election_id,
                options,
                start_time,
                end_time,
            } => vec![
                (fields::ELECTION_ID, election_id),
                (fields::OPTIONS, options),
                (fields::START_TIME, start_time),
                (fields::END_TIME, end_time),
            ],
            Command::CastVote {
                voter_id,
                candidate,
                vote_election_id,
            } => vec![
                (fields::VOTER_ID, voter_id),
                (fields::CANDIDATE, candidate),
                (fields::VOTE_ELECTION_ID, vote_election_id),
            ],
            Command::CalculateResults { result_election_id } => {
                vec![(fields::RESULT_ELECTION_ID, result_election_id)]
            }
            Command::Batch { .. } => Vec::new(),
        };

        pairs
            .into_iter()
            .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
            .collect()
    }
}

impl CliConfig {
    pub fn load_routes(&self) -> Result<RoutesConfig> {
        let config = match &self.routes {
            Some(path) => RoutesConfig::from_file(path)?,
            None => RoutesConfig::default(),
        };

        let config = match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.clone()),
            None => config,
        };

        config.validate()?;
        Ok(config)
    }

    /// 表單檔先載入，命令列參數覆蓋其值
    pub fn load_form(&self) -> Result<MapForm> {
        let mut form = match &self.form {
            Some(path) => TomlForm::from_file(path)?.into_map_form(),
            None => MapForm::new(),
        };
        form.merge(self.command.field_overrides());
        Ok(form)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        }
        if let Some(path) = &self.routes {
            validation::validate_path("routes", path)?;
        }
        if let Some(path) = &self.form {
            validation::validate_path("form", path)?;
        }
        if let Some(path) = &self.output_dir {
            validation::validate_path("output_dir", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FormReader;

    #[test]
    fn test_add_ballot_options_stay_unsplit() {
        let config = CliConfig::try_parse_from([
            "ballot-bridge",
            "add-ballot",
            "--election-id",
            "e-1",
            "--options",
            "A,B,C",
        ])
        .unwrap();

        let form = config.load_form().unwrap();
        assert_eq!(form.value("options").as_deref(), Some("A,B,C"));
        assert_eq!(form.value("electionId").as_deref(), Some("e-1"));
        assert_eq!(form.value("startTime"), None);
        assert_eq!(config.command.operations(), vec![Operation::AddBallot]);
    }

    #[test]
    fn test_batch_operations() {
        let config = CliConfig::try_parse_from([
            "ballot-bridge",
            "--base-url",
            "http://127.0.0.1:9000",
            "batch",
            "add-user",
            "calculate-results",
        ])
        .unwrap();

        assert_eq!(
            config.command.operations(),
            vec![Operation::AddUser, Operation::CalculateResults]
        );
        assert!(config.command.field_overrides().is_empty());

        let routes = config.load_routes().unwrap();
        assert_eq!(routes.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_batch_requires_operations() {
        assert!(CliConfig::try_parse_from(["ballot-bridge", "batch"]).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = CliConfig::try_parse_from([
            "ballot-bridge",
            "--base-url",
            "ftp://example.com",
            "add-user",
        ])
        .unwrap();

        assert!(config.validate().is_err());
        assert!(config.load_routes().is_err());
    }
}
