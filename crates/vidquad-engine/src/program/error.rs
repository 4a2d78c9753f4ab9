use std::fmt;

use crate::device::ShaderStage;

/// Driver object a creation call failed to produce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DriverObject {
    Shader(ShaderStage),
    Program,
}

impl fmt::Display for DriverObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverObject::Shader(stage) => write!(f, "{stage} shader"),
            DriverObject::Program => f.write_str("program"),
        }
    }
}

/// Step of a program build.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BuildStage {
    /// Creating the program object itself.
    Setup,
    VertexCompile,
    FragmentCompile,
    Link,
    Validate,
}

impl From<ShaderStage> for BuildStage {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => BuildStage::VertexCompile,
            ShaderStage::Fragment => BuildStage::FragmentCompile,
        }
    }
}

/// Failure of a single program-building step.
///
/// `log` fields carry the driver's info log, which may be empty on drivers that
/// report nothing.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ProgramError {
    #[error("driver failed to create {object}: {reason}")]
    ObjectCreation { object: DriverObject, reason: String },

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link program: {log}")]
    ProgramLink { log: String },

    /// Advisory; some drivers report false positives.
    #[error("program failed validation: {log}")]
    ProgramValidate { log: String },
}

impl ProgramError {
    /// The build step this error belongs to.
    pub fn stage(&self) -> BuildStage {
        match self {
            ProgramError::ObjectCreation { object: DriverObject::Shader(stage), .. }
            | ProgramError::ShaderCompile { stage, .. } => BuildStage::from(*stage),
            ProgramError::ObjectCreation { object: DriverObject::Program, .. } => {
                BuildStage::Setup
            }
            ProgramError::ProgramLink { .. } => BuildStage::Link,
            ProgramError::ProgramValidate { .. } => BuildStage::Validate,
        }
    }
}

/// Failure of a whole program build.
///
/// Both shader stages are always compiled, so a build can fail at more than one
/// step; every failure is kept, in the order it happened.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BuildError {
    failures: Vec<ProgramError>,
}

impl BuildError {
    pub(crate) fn new(failures: Vec<ProgramError>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    pub fn errors(&self) -> &[ProgramError] {
        &self.failures
    }

    pub fn into_errors(self) -> Vec<ProgramError> {
        self.failures
    }

    /// True if the build failed at `stage`.
    pub fn failed(&self, stage: BuildStage) -> bool {
        self.error_for(stage).is_some()
    }

    pub fn error_for(&self, stage: BuildStage) -> Option<&ProgramError> {
        self.failures.iter().find(|e| e.stage() == stage)
    }

    pub fn failed_stages(&self) -> impl Iterator<Item = BuildStage> + '_ {
        self.failures.iter().map(ProgramError::stage)
    }
}

impl From<ProgramError> for BuildError {
    fn from(err: ProgramError) -> Self {
        Self::new(vec![err])
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("shader program build failed")?;
        for err in &self.failures {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_err(stage: ShaderStage) -> ProgramError {
        ProgramError::ShaderCompile {
            stage,
            log: "syntax error".into(),
        }
    }

    #[test]
    fn errors_map_to_build_stages() {
        assert_eq!(compile_err(ShaderStage::Vertex).stage(), BuildStage::VertexCompile);
        assert_eq!(compile_err(ShaderStage::Fragment).stage(), BuildStage::FragmentCompile);
        assert_eq!(
            ProgramError::ObjectCreation {
                object: DriverObject::Program,
                reason: "no context".into()
            }
            .stage(),
            BuildStage::Setup
        );
        assert_eq!(
            ProgramError::ObjectCreation {
                object: DriverObject::Shader(ShaderStage::Fragment),
                reason: "no context".into()
            }
            .stage(),
            BuildStage::FragmentCompile
        );
        assert_eq!(ProgramError::ProgramLink { log: String::new() }.stage(), BuildStage::Link);
    }

    #[test]
    fn build_error_reports_every_failed_stage() {
        let err = BuildError::new(vec![
            compile_err(ShaderStage::Vertex),
            compile_err(ShaderStage::Fragment),
        ]);
        assert!(err.failed(BuildStage::VertexCompile));
        assert!(err.failed(BuildStage::FragmentCompile));
        assert!(!err.failed(BuildStage::Link));
        assert_eq!(
            err.failed_stages().collect::<Vec<_>>(),
            vec![BuildStage::VertexCompile, BuildStage::FragmentCompile]
        );
    }

    #[test]
    fn build_error_display_lists_failures() {
        let err = BuildError::from(compile_err(ShaderStage::Vertex));
        let text = err.to_string();
        assert!(text.starts_with("shader program build failed"));
        assert!(text.contains("failed to compile vertex shader: syntax error"));
    }
}
