use std::process;

use clap::Parser;
use log::{error, warn};

use brownian_noise::error::NoiseError;
use brownian_noise::inp::arg_parse::{self, Args};
use brownian_noise::render::{self, batch, engrave, spectrum};

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), NoiseError> {
    let config = arg_parse::resolve(args)?;

    if args.count > 1 {
        if args.plot {
            warn!("--plot is ignored when rendering a batch");
        }
        for path in batch::render_batch(&config, args.count, &args.file_name)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let samples = render::render(&config)?;
    engrave::write_pcm24(config.sample_rate, &samples, &args.file_name)?;

    if args.plot {
        let data = spectrum::plot_data(&samples, config.sample_rate, args.plot_points)?;
        spectrum::write_plot_data(&args.plot_file_name, &data)?;
    }
    println!("{}", args.file_name.display());
    Ok(())
}
