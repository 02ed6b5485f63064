use std::{error::Error, io, path::Path};

use dotenv::dotenv;
use log::{info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
};
use macroplan_client::{ClientConfig, FoodLookup};
use macroplan_console::Session;

const LOG_CONFIG: &str = "log4rs-console.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn food_lookup() -> Result<Option<Box<dyn FoodLookup>>, Box<dyn Error>> {
    let Some(config) = ClientConfig::from_env() else {
        info!("USDA_API_KEY not set, skipping food suggestions");
        return Ok(None);
    };
    Ok(Some(macroplan_client::create(config)?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_logging()?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), food_lookup()?);
    session.run().await?;

    Ok(())
}
