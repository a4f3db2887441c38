use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voxgate")]
#[command(about = "Voice browser-agent gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway HTTP server (default if no command specified)
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Chat model name
        #[arg(long, default_value = "gpt-4o")]
        model: String,

        /// File whose contents replace the default persona
        #[arg(long)]
        persona_file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "voxgate",
            "serve",
            "--port",
            "9000",
            "--model",
            "gpt-4o-mini",
            "--persona-file",
            "/tmp/persona.txt",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve { host, port, model, persona_file }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 9000);
                assert_eq!(model, "gpt-4o-mini");
                assert_eq!(persona_file.as_deref(), Some(Path::new("/tmp/persona.txt")));
            }
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_persona_file_is_optional() {
        let cli = Cli::try_parse_from(["voxgate", "serve"]).unwrap();
        match cli.command {
            Some(Commands::Serve { persona_file, .. }) => assert!(persona_file.is_none()),
            None => panic!("expected serve command"),
        }
    }
}
