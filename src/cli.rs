use clap::Parser;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(
        short,
        long,
        help = "instance file path (read from standard input when omitted)"
    )]
    pub instance: Option<String>,
}
