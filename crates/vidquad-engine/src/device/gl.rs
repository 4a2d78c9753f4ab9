use std::fmt;

/// Shader pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Resolved location of a uniform in a linked program.
///
/// Stored as the driver's signed integer type. A resolved location is never
/// negative; absence is modelled with `Option` rather than [`Self::NOT_FOUND`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation(i32);

impl UniformLocation {
    /// Value GL-style APIs use for "no such uniform".
    pub const NOT_FOUND: i32 = -1;

    #[inline]
    pub const fn new(location: i32) -> Self {
        debug_assert!(location >= 0);
        Self(location)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// The rendering context a program build runs against.
///
/// Driver state is bound to the thread that owns the context, so the context is
/// passed explicitly to every operation instead of being reached through globals.
/// Implementations wrap the host's GL binding; every call here maps one-to-one onto
/// a driver entry point.
///
/// Handles are plain copyable ids. Ownership of the driver objects behind them is
/// tracked by the program builder, not by the handle types.
pub trait GlContext {
    type Shader: Copy + Eq + fmt::Debug;
    type Program: Copy + Eq + fmt::Debug;

    /// Creates an empty shader object. Fails when the driver returns no object.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;

    /// Replaces the shader's source with `source`.
    fn shader_source(&self, shader: Self::Shader, source: &str);

    fn compile_shader(&self, shader: Self::Shader);

    fn shader_compile_status(&self, shader: Self::Shader) -> bool;

    fn shader_info_log(&self, shader: Self::Shader) -> String;

    fn delete_shader(&self, shader: Self::Shader);

    /// Creates an empty program object. Fails when the driver returns no object.
    fn create_program(&self) -> Result<Self::Program, String>;

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Associates a vertex attribute name with a location.
    ///
    /// Only takes effect at the next link.
    fn bind_attrib_location(&self, program: Self::Program, location: u32, name: &str);

    fn link_program(&self, program: Self::Program);

    fn program_link_status(&self, program: Self::Program) -> bool;

    fn validate_program(&self, program: Self::Program);

    fn program_validate_status(&self, program: Self::Program) -> bool;

    /// Log of the most recent link or validate call.
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Location of a uniform in a linked program, `None` if it does not exist.
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<UniformLocation>;

    fn delete_program(&self, program: Self::Program);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_location_keeps_full_driver_range() {
        assert_eq!(UniformLocation::new(7).raw(), 7);
        assert_eq!(UniformLocation::new(i32::MAX).raw(), i32::MAX);
        assert_ne!(UniformLocation::new(0).raw(), UniformLocation::NOT_FOUND);
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
