//! `<stem>.provenance.json` records written beside every CLI artifact.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use hullscan::geom2::rand::{CloudShape, ReplayToken};
use hullscan::{Algorithm, GeomCfg};
use serde::Serialize;

/// How a point cloud was drawn by `sample`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SampleParams {
    pub cloud: CloudShape,
    pub n: usize,
    pub token: ReplayToken,
}

/// What produced an artifact. Fields that do not apply to a command are omitted.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    command: &'static str,
    code_rev: String,
    hullscan_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm: Option<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eps_orient: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<SampleParams>,
}

impl Sidecar {
    pub fn new(command: &'static str, run_id: Option<String>) -> Self {
        Self {
            command,
            code_rev: current_git_rev(),
            hullscan_version: hullscan::VERSION,
            run_id,
            algorithm: None,
            eps_orient: None,
            input: None,
            sample: None,
        }
    }

    /// Record the engine run; `input: None` means the bundled demo cloud.
    pub fn hull(mut self, algorithm: Algorithm, cfg: GeomCfg, input: Option<&Path>) -> Self {
        self.algorithm = Some(algorithm);
        self.eps_orient = Some(cfg.eps_orient);
        self.input = input.map(Path::to_path_buf);
        self
    }

    pub fn sample(mut self, params: SampleParams) -> Self {
        self.sample = Some(params);
        self
    }

    /// Write next to `artifact` and return the sidecar path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        let doc = SidecarDoc {
            provenance: self,
            artifact: artifact.to_string_lossy().into_owned(),
        };
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "sidecar");
        Ok(path)
    }
}

#[derive(Serialize)]
struct SidecarDoc<'a> {
    provenance: &'a Sidecar,
    artifact: String,
}

/// `out/hull.json` → `out/hull.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(out) if out.status.success() => {
            String::from_utf8_lossy(&out.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_beside_artifact() {
        assert_eq!(
            sidecar_path(Path::new("runs/a/hull.json")),
            Path::new("runs/a/hull.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("cloud")),
            Path::new("cloud.provenance.json")
        );
    }

    #[test]
    fn hull_sidecar_has_typed_fields() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        let cfg = GeomCfg { eps_orient: 1e-6 };
        let path = Sidecar::new("hull", Some("r1".into()))
            .hull(Algorithm::Quickhull, cfg, None)
            .write_beside(&artifact)
            .unwrap();
        let doc: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        let prov = &doc["provenance"];
        assert_eq!(prov["command"], "hull");
        assert_eq!(prov["algorithm"], "quickhull");
        assert_eq!(prov["eps_orient"], 1e-6);
        assert_eq!(prov["run_id"], "r1");
        assert_eq!(prov["hullscan_version"], hullscan::VERSION);
        assert!(prov.get("input").is_none());
        assert!(prov.get("sample").is_none());
        assert_eq!(doc["artifact"], artifact.to_string_lossy().as_ref());
    }

    #[test]
    fn sample_sidecar_records_token() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("cloud.txt");
        let params = SampleParams {
            cloud: CloudShape::Disk { radius: 2.0 },
            n: 40,
            token: ReplayToken::new(9, 0),
        };
        let path = Sidecar::new("sample", None)
            .sample(params)
            .write_beside(&artifact)
            .unwrap();
        let doc: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["provenance"]["sample"]["n"], 40);
        assert!(doc["provenance"].get("algorithm").is_none());
        assert!(doc["provenance"].get("run_id").is_none());
    }
}
