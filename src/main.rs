use clap::Parser;
use mindreader::cli::*;
use mindreader::play::*;
use mindreader::players::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    mindreader::log(args.level())?;
    let coin = args.coin();
    let mut source: Box<dyn Source> = match args.input {
        Input::Prompt => Box::new(Human),
        Input::Lines => Box::new(Lines::stdin()),
    };
    let ref mut console = Console::new(std::io::stdout().lock(), args.json);
    match args.mode {
        Mode::Reader => console.session(&mut Reader::new(coin), source.as_mut(), args.mode)?,
        Mode::Pennies => console.session(&mut Pennies::new(coin), source.as_mut(), args.mode)?,
    };
    Ok(())
}
