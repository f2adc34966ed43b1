use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// Returns `Ok(None)` when there is no stored content yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.file_path.display(), e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_grid_snake_provider_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        let content = provider.get_config_content();
        assert_eq!(content, Ok(None));
    }

    #[test]
    fn test_written_content_can_be_read_back() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        provider.set_config_content("board: {}\n").unwrap();

        let content = provider.get_config_content().unwrap();
        assert_eq!(content.as_deref(), Some("board: {}\n"));

        let _ = std::fs::remove_file(provider.path());
    }
}
