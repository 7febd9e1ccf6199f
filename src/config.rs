use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::sampler::Background;
use crate::SampleError;

/// Sampler settings read from a YAML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "UPPERCASE", deny_unknown_fields)]
pub struct Config {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub background: Option<Background>,
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, SampleError> {
    let path = path.as_ref();
    let config: Config = load_yaml(path).map_err(|err| SampleError::Config {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    log::debug!("config {}: {:?}", path.display(), config);

    Ok(config)
}

fn load_yaml<T>(filename: &Path) -> Result<T, Box<dyn std::error::Error>>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let result: T = serde_yaml::from_reader(reader)?;
    Ok(result)
}
