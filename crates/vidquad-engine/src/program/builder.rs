use crate::device::{GlContext, ShaderStage, UniformLocation};

use super::error::{BuildError, DriverObject, ProgramError};
use super::object::{ProgramGuard, ShaderObject};
use super::uniforms::UniformTable;

/// Program build configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Log driver compile/link/validate logs and failing shader sources.
    ///
    /// Defaults to on in debug builds.
    pub diagnostics: bool,

    /// Run the driver's validation pass after linking.
    ///
    /// Validation failures are logged and recorded, never fatal.
    pub validate: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            diagnostics: cfg!(debug_assertions),
            validate: cfg!(debug_assertions),
        }
    }
}

/// Vertex attribute name bound to a fixed location before linking.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeBinding<'a> {
    pub name: &'a str,
    pub location: u32,
}

impl<'a> AttributeBinding<'a> {
    #[inline]
    pub const fn new(name: &'a str, location: u32) -> Self {
        Self { name, location }
    }
}

/// Outcome of the advisory validation pass.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Validation {
    #[default]
    Skipped,
    Passed,
    /// The driver flagged the program. Carries [`ProgramError::ProgramValidate`].
    Failed(ProgramError),
}

/// A successfully linked program.
///
/// The program handle belongs to the caller from here on; the builder keeps no
/// reference to it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LinkedProgram<P> {
    pub program: P,
    pub uniforms: UniformTable,
    pub validation: Validation,
}

/// Builds GPU programs against a borrowed rendering context.
///
/// All calls must happen on the thread that owns `ctx`.
pub struct ProgramBuilder<'c, C: GlContext> {
    ctx: &'c C,
    config: BuildConfig,
}

impl<'c, C: GlContext> ProgramBuilder<'c, C> {
    pub fn new(ctx: &'c C) -> Self {
        Self::with_config(ctx, BuildConfig::default())
    }

    pub fn with_config(ctx: &'c C, config: BuildConfig) -> Self {
        Self { ctx, config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Compiles `fragments`, concatenated in order, as one shader of `stage`.
    ///
    /// The shader object is deleted when the returned guard drops, including on the
    /// error path.
    pub fn compile_shader(
        &self,
        stage: ShaderStage,
        fragments: &[&str],
    ) -> Result<ShaderObject<'c, C>, ProgramError> {
        let handle = self
            .ctx
            .create_shader(stage)
            .map_err(|reason| ProgramError::ObjectCreation {
                object: DriverObject::Shader(stage),
                reason,
            })?;
        let shader = ShaderObject::new(self.ctx, handle, stage);

        let source = fragments.concat();
        self.ctx.shader_source(handle, &source);
        self.ctx.compile_shader(handle);

        let log = self.ctx.shader_info_log(handle);
        if self.config.diagnostics && !log.trim().is_empty() {
            log::debug!("{stage} shader compile log:\n{log}");
        }

        if !self.ctx.shader_compile_status(handle) {
            log::error!("failed to compile {stage} shader");
            if self.config.diagnostics {
                log::debug!("{stage} shader source:\n{source}");
            }
            return Err(ProgramError::ShaderCompile { stage, log });
        }

        Ok(shader)
    }

    /// Links every shader currently attached to `program`.
    pub fn link_program(&self, program: C::Program) -> Result<(), ProgramError> {
        self.ctx.link_program(program);

        let log = self.ctx.program_info_log(program);
        if self.config.diagnostics && !log.trim().is_empty() {
            log::debug!("program {program:?} link log:\n{log}");
        }

        if !self.ctx.program_link_status(program) {
            log::error!("failed to link program {program:?}");
            return Err(ProgramError::ProgramLink { log });
        }
        Ok(())
    }

    /// Runs the driver's consistency check (e.g. conflicting sampler units).
    ///
    /// The result is advisory: drivers are known to report false positives.
    pub fn validate_program(&self, program: C::Program) -> Result<(), ProgramError> {
        self.ctx.validate_program(program);

        let log = self.ctx.program_info_log(program);
        if self.config.diagnostics && !log.trim().is_empty() {
            log::debug!("program {program:?} validate log:\n{log}");
        }

        if !self.ctx.program_validate_status(program) {
            return Err(ProgramError::ProgramValidate { log });
        }
        Ok(())
    }

    /// Location of `name` in a linked program, `None` if the program has no such
    /// uniform.
    pub fn resolve_uniform_location(
        &self,
        program: C::Program,
        name: &str,
    ) -> Option<UniformLocation> {
        self.ctx.uniform_location(program, name)
    }

    /// Compiles, links and (optionally) validates a vertex/fragment program.
    ///
    /// Attribute names are bound to their locations before linking; empty names are
    /// skipped. On success every non-empty uniform name is resolved, in request
    /// order.
    ///
    /// Both stages are always compiled so a failing build reports every broken
    /// stage. If either stage fails to compile, the shaders are never attached and
    /// the link is not issued, so no driver link log exists for that build.
    /// Intermediate shader objects are deleted on every path; on failure the
    /// program object is deleted too.
    pub fn create_program(
        &self,
        vertex_source: &str,
        fragment_source: &str,
        attributes: &[AttributeBinding<'_>],
        uniforms: &[&str],
    ) -> Result<LinkedProgram<C::Program>, BuildError> {
        let program = self
            .ctx
            .create_program()
            .map_err(|reason| ProgramError::ObjectCreation {
                object: DriverObject::Program,
                reason,
            })?;
        let program = ProgramGuard::new(self.ctx, program);

        let vertex = self.compile_shader(ShaderStage::Vertex, &[vertex_source]);
        let fragment = self.compile_shader(ShaderStage::Fragment, &[fragment_source]);
        let (vertex, fragment) = match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => (vertex, fragment),
            (vertex, fragment) => {
                let failures = [vertex.err(), fragment.err()].into_iter().flatten().collect();
                return Err(BuildError::new(failures));
            }
        };

        self.ctx.attach_shader(program.handle(), vertex.handle());
        self.ctx.attach_shader(program.handle(), fragment.handle());

        // Bindings only take effect at link time.
        for binding in attributes.iter().filter(|b| !b.name.is_empty()) {
            self.ctx
                .bind_attrib_location(program.handle(), binding.location, binding.name);
        }

        self.link_program(program.handle())?;

        let validation = if self.config.validate {
            match self.validate_program(program.handle()) {
                Ok(()) => Validation::Passed,
                Err(err) => {
                    log::warn!("{err}; continuing with program {:?}", program.handle());
                    Validation::Failed(err)
                }
            }
        } else {
            Validation::Skipped
        };

        let uniforms = UniformTable::resolve(uniforms, |name| {
            self.resolve_uniform_location(program.handle(), name)
        });

        drop(vertex);
        drop(fragment);

        let program = program.release();
        log::debug!(
            "linked program {program:?} ({} uniforms requested)",
            uniforms.len()
        );

        Ok(LinkedProgram {
            program,
            uniforms,
            validation,
        })
    }
}
