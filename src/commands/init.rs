use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Traitmap Configuration

[validation]
# "reject" fails on trait values outside [1, 5]; "clamp" pulls them into range
out_of_domain = "reject"

[thresholds.team]
min_size = 3
max_size = 12
max_neuroticism = 3.5
min_agreeableness = 2.5
min_conscientiousness = 2.8
max_agreeableness_variance = 1.5
max_conscientiousness_variance = 1.8

[thresholds.organization]
# max_size = 0 disables the size check
max_size = 0
max_agreeableness_variance = 0.5
max_conscientiousness_variance = 0.6

# Extra role targets for `traitmap team --roles`
# [roles.facilitator]
# openness = 3.5
# conscientiousness = 3.5
# extraversion = 4.0
# agreeableness = 4.5
# neuroticism = 2.0
"#;

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}
