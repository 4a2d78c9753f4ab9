//! In-memory `GlContext` for tests.
//!
//! Compiles any source that declares `void main` and has no `#error` line, links
//! when one compiled vertex and one compiled fragment shader are attached, and
//! assigns uniform locations in declaration order. Every driver call is recorded.
//! The `fail_*` flags force the matching driver step to fail.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::device::{GlContext, ShaderStage, UniformLocation};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32, u32),
    BindAttribLocation(u32, u32, String),
    LinkProgram(u32),
    ValidateProgram(u32),
    UniformLocation(u32, String),
    DeleteProgram(u32),
}

struct Shader {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Default)]
struct Program {
    attached: Vec<u32>,
    attribs: HashMap<String, u32>,
    uniforms: Vec<String>,
    linked: bool,
    log: String,
    validated: bool,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: HashMap<u32, Shader>,
    programs: HashMap<u32, Program>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub(crate) struct ScriptedContext {
    state: RefCell<State>,
    pub fail_program_creation: bool,
    pub fail_shader_creation: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_validation: bool,
}

impl ScriptedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Source submitted for a live shader.
    pub fn source(&self, shader: u32) -> Option<String> {
        self.state.borrow().shaders.get(&shader).map(|s| s.source.clone())
    }

    /// Shader ids not yet deleted.
    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    /// Program ids not yet deleted.
    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    /// Attribute location the last link recorded for `name`.
    pub fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        let state = self.state.borrow();
        let program = state.programs.get(&program)?;
        program.attribs.get(name).copied()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn alloc(state: &mut State) -> u32 {
        state.next_id += 1;
        state.next_id
    }
}

/// Names declared as `uniform <type> <name>;` in `source`, in order.
fn declared_uniforms(source: &str) -> impl Iterator<Item = &str> {
    source.lines().filter_map(|line| {
        let rest = line.trim().strip_prefix("uniform ")?;
        let decl = rest.split(';').next()?;
        decl.split_whitespace().last()
    })
}

impl GlContext for ScriptedContext {
    type Shader = u32;
    type Program = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        self.record(Call::CreateShader(stage));
        if self.fail_shader_creation == Some(stage) {
            return Err("out of shader objects".into());
        }
        let mut state = self.state.borrow_mut();
        let id = Self::alloc(&mut state);
        state.shaders.insert(
            id,
            Shader {
                stage,
                source: String::new(),
                compiled: false,
                log: String::new(),
            },
        );
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(Call::ShaderSource(shader));
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            if !s.source.contains("void main") {
                s.compiled = false;
                s.log = "ERROR: 0:1: 'main' : function not defined".into();
            } else if s.source.lines().any(|l| l.trim_start().starts_with("#error")) {
                s.compiled = false;
                s.log = "ERROR: 0:1: '#error' : forced failure".into();
            } else {
                s.compiled = true;
                s.log.clear();
            }
        }
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
        self.state.borrow_mut().shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        self.record(Call::CreateProgram);
        if self.fail_program_creation {
            return Err("context lost".into());
        }
        let mut state = self.state.borrow_mut();
        let id = Self::alloc(&mut state);
        state.programs.insert(id, Program::default());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn bind_attrib_location(&self, program: u32, location: u32, name: &str) {
        self.record(Call::BindAttribLocation(program, location, name.to_string()));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
        let mut state = self.state.borrow_mut();
        let State {
            shaders,
            programs,
            calls,
            ..
        } = &mut *state;
        let fail_link = self.fail_link;
        let Some(p) = programs.get_mut(&program) else { return };

        let linked = {
            let attached = &p.attached;
            let compiled_stage = |stage: ShaderStage| {
                attached
                    .iter()
                    .filter_map(|id| shaders.get(id))
                    .any(|s| s.stage == stage && s.compiled)
            };
            !fail_link
                && compiled_stage(ShaderStage::Vertex)
                && compiled_stage(ShaderStage::Fragment)
        };
        p.linked = linked;
        p.log = if p.linked {
            String::new()
        } else {
            "ERROR: program has no compiled vertex/fragment pair".into()
        };

        p.uniforms.clear();
        if p.linked {
            for id in &p.attached {
                let Some(s) = shaders.get(id) else { continue };
                for uniform in declared_uniforms(&s.source) {
                    if !p.uniforms.iter().any(|u| u == uniform) {
                        p.uniforms.push(uniform.to_string());
                    }
                }
            }
        }

        // Bindings issued so far apply; later ones wait for the next link.
        p.attribs.clear();
        for call in calls.iter() {
            if let Call::BindAttribLocation(id, location, name) = call {
                if *id == program {
                    p.attribs.insert(name.clone(), *location);
                }
            }
        }
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
        let fail = self.fail_validation;
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.validated = p.linked && !fail;
            p.log = if p.validated {
                String::new()
            } else {
                "Validation Failed: sampler units conflict".into()
            };
        }
    }

    fn program_validate_status(&self, program: u32) -> bool {
        self.state
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.validated)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<UniformLocation> {
        self.record(Call::UniformLocation(program, name.to_string()));
        let state = self.state.borrow();
        let p = state.programs.get(&program).filter(|p| p.linked)?;
        p.uniforms
            .iter()
            .position(|u| u == name)
            .map(|i| UniformLocation::new(i as i32))
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
        self.state.borrow_mut().programs.remove(&program);
    }
}
