use crate::libs::config::Config;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Config::init_and_save()
}
