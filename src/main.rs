use bstdemo::*;
use log::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = config_path_from_args();
    let cfg = Config::load(config_path.as_deref())?;
    debug!("{:?}", cfg);

    for line in driver::run(&cfg)? {
        println!("{}", line);
    }

    Ok(())
}
