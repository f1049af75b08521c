mod config_files;
mod resource_scenarios;
