use std::{env, io};

use anyhow::Context;
use log::info;

use perceptron::{
    RunConfig,
    trace::{JsonLinesSink, LogSink},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => RunConfig::from_path(&path)
            .with_context(|| format!("failed to load run config from '{path}'"))?,
        None => {
            info!("no run config given, training the OR gate example");
            RunConfig::or_gate()
        }
    };

    let weights = match env::var("PERCEPTRON_TRACE").as_deref() {
        Ok("json") => config.run(&mut JsonLinesSink::new(io::stdout().lock()))?,
        _ => config.run(&mut LogSink)?,
    };

    println!("{:?}", weights.to_vec());
    Ok(())
}
