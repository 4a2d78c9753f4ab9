use crate::device::{GlContext, ShaderStage};

/// Compiled shader object, deleted from the driver when dropped.
///
/// A program keeps its own reference to attached shaders, so dropping this after
/// linking does not affect the linked program.
pub struct ShaderObject<'c, C: GlContext> {
    ctx: &'c C,
    handle: C::Shader,
    stage: ShaderStage,
}

impl<'c, C: GlContext> ShaderObject<'c, C> {
    pub(crate) fn new(ctx: &'c C, handle: C::Shader, stage: ShaderStage) -> Self {
        Self { ctx, handle, stage }
    }

    #[inline]
    pub fn handle(&self) -> C::Shader {
        self.handle
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl<C: GlContext> Drop for ShaderObject<'_, C> {
    fn drop(&mut self) {
        self.ctx.delete_shader(self.handle);
    }
}

/// Program object under construction.
///
/// Deleted on drop unless [`ProgramGuard::release`] handed it to the caller.
pub(crate) struct ProgramGuard<'c, C: GlContext> {
    ctx: &'c C,
    handle: C::Program,
    armed: bool,
}

impl<'c, C: GlContext> ProgramGuard<'c, C> {
    pub(crate) fn new(ctx: &'c C, handle: C::Program) -> Self {
        Self {
            ctx,
            handle,
            armed: true,
        }
    }

    #[inline]
    pub(crate) fn handle(&self) -> C::Program {
        self.handle
    }

    pub(crate) fn release(mut self) -> C::Program {
        self.armed = false;
        self.handle
    }
}

impl<C: GlContext> Drop for ProgramGuard<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.ctx.delete_program(self.handle);
        }
    }
}
