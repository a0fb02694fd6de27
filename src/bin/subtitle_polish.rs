use std::env;
use std::fs;
use subpolish::{polish_local_file, AlignerConfig, OptimizerConfig};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: subtitle_polish <input.srt|input.json> [output.srt]");
        println!("Example: subtitle_polish tests/testdata/whisper_words.json out.srt");
        return;
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("❌ Failed: {}", e);
        std::process::exit(1);
    }
}

fn run(input: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let srt = polish_local_file(input, &AlignerConfig::default(), &OptimizerConfig::default())?;

    match output {
        Some(path) => {
            fs::write(path, &srt)?;
            println!("✅ Wrote {} ({} bytes)", path, srt.len());
        }
        None => print!("{}", srt),
    }

    Ok(())
}
