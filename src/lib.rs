pub mod driver;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub fn config_path_from_args() -> Option<String> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "bstdemo".to_string());
    let config_path = args.next();
    if args.next().is_some() {
        usage(&program);
    }

    config_path
}

fn usage(program: &str) -> ! {
    eprintln!("usage: {} [CONFIG]", program);
    std::process::exit(1)
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of keys to insert.
    pub count: usize,
    /// Smallest key that may be generated.
    pub min_key: i64,
    /// Keys are drawn below this bound.
    pub max_key: i64,
    /// Fixed generator seed, OS entropy if unset.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 10,
            min_key: 0,
            max_key: 100,
            seed: None,
        }
    }
}

impl Config {
    pub fn figment(path: Option<&str>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("BSTDEMO_"))
    }

    pub fn load(path: Option<&str>) -> anyhow::Result<Config> {
        if let Some(path) = path {
            anyhow::ensure!(std::path::Path::new(path).is_file(), "config file {} not found", path);
        }
        let cfg: Config = Config::figment(path).extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.min_key < self.max_key,
            "empty key range: min_key {} must be below max_key {}",
            self.min_key,
            self.max_key
        );
        Ok(())
    }
}
