//! Background services tracked through pid files.

use std::path::{Path, PathBuf};

use crate::port::outbound::{ServiceRegistry, ServiceStatus};

/// Services the console manages, in display order.
pub const SERVICE_NAMES: [&str; 6] = ["PBRun", "PBRemote", "PBMon", "PBStat", "PBData", "PBCoinData"];

/// A service counts as running while `{data_dir}/pid/{name}.pid` exists.
#[derive(Debug, Clone)]
pub struct PidFileServices {
    pid_dir: PathBuf,
}

impl PidFileServices {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            pid_dir: data_dir.join("pid"),
        }
    }

    fn pid_file(&self, name: &str) -> PathBuf {
        self.pid_dir.join(format!("{name}.pid"))
    }
}

impl ServiceRegistry for PidFileServices {
    fn statuses(&self) -> Vec<ServiceStatus> {
        SERVICE_NAMES
            .iter()
            .map(|name| ServiceStatus {
                name: (*name).to_string(),
                running: self.pid_file(name).is_file(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_when_pid_file_present() {
        let data = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(data.path().join("pid")).unwrap();
        std::fs::write(data.path().join("pid/PBRun.pid"), "4242").unwrap();

        let statuses = PidFileServices::new(data.path()).statuses();

        assert_eq!(statuses.len(), SERVICE_NAMES.len());
        assert!(statuses.iter().find(|s| s.name == "PBRun").unwrap().running);
        assert!(!statuses.iter().find(|s| s.name == "PBMon").unwrap().running);
    }
}
