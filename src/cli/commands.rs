// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Analyze a password (prompts when omitted)
    Analyze {
        /// Password to analyze
        password: Option<String>,
    },

    /// Estimate crack time for a single hashing algorithm
    CrackTime {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// One of plaintext, md5, sha256, bcrypt, argon2
        #[arg(long, short, default_value = "bcrypt")]
        algorithm: String,
    },

    /// Generate a random password
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Suggest stronger variants of a password
    Improve {
        /// Password to improve (prompts when omitted)
        password: Option<String>,
    },

    /// List hashing algorithms and their properties
    Algorithms,

    /// List example passwords with their expected scores
    Examples,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides LAB_PORT)
        #[arg(long, short)]
        port: Option<u16>,

        /// Address to bind (overrides LAB_ADDRESS)
        #[arg(long)]
        address: Option<String>,
    },
}
