// SPDX-License-Identifier: LGPL-3.0-or-later OR MPL-2.0
// This file is a part of `shader-program`.
//
// `shader-program` is free software: you can redistribute it and/or modify it under the
// terms of either:
//
// * GNU Lesser General Public License as published by the Free Software Foundation, either
//   version 3 of the License, or (at your option) any later version.
// * Mozilla Public License as published by the Mozilla Foundation, version 2.
//
// `shader-program` is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR
// PURPOSE. See the GNU Lesser General Public License or the Mozilla Public License for more
// details.
//
// You should have received a copy of the GNU Lesser General Public License and the Mozilla
// Public License along with `shader-program`. If not, see <https://www.gnu.org/licenses/>.

//! A [`shader-program`] driver that uses the [`glow`] crate.
//!
//! [`shader-program`]: https://crates.io/crates/shader-program
//! [`glow`]: https://crates.io/crates/glow

use glow::HasContext;

use shader_program::{Driver, Error, ShaderProgram, ShaderStage};

use std::path::Path;

/// A shader program built over a [`glow`] context.
pub type GlowProgram<H> = ShaderProgram<GlowDriver<H>>;

/// A wrapper around a [`glow`] context implementing [`Driver`].
///
/// The GL context must be current on the calling thread for the whole
/// lifetime of this value, including when it (or a [`ShaderProgram`] built
/// on it) is dropped.
pub struct GlowDriver<H: HasContext + ?Sized> {
    context: H,
}

impl<H: HasContext> GlowDriver<H> {
    /// Wrap a [`glow`] context.
    pub fn new(context: H) -> Self {
        Self { context }
    }

    /// Unwrap the underlying context.
    pub fn into_context(self) -> H {
        self.context
    }
}

impl<H: HasContext + ?Sized> GlowDriver<H> {
    /// A reference to the underlying [`glow`] context.
    pub fn context(&self) -> &H {
        &self.context
    }
}

/// Read, compile and link a shader program from two source files.
pub fn load_program<H: HasContext>(
    context: H,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<GlowProgram<H>, Error> {
    ShaderProgram::from_paths(GlowDriver::new(context), vertex_path, fragment_path)
}

fn stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

impl<H: HasContext + ?Sized> Driver for GlowDriver<H> {
    type Shader = H::Shader;
    type Program = H::Program;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { self.context.create_shader(stage_to_gl(stage)) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.context.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.context.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.context.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.context.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.context.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.context.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.context.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.context.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.context.link_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.context.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.context.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.context.delete_program(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe {
            self.context.use_program(program);
            gl_error(&self.context);
        }
    }
}

/// Logs any pending GL error without interrupting the caller.
fn gl_error(h: &(impl HasContext + ?Sized)) {
    let err = unsafe { h.get_error() };

    if err != glow::NO_ERROR {
        let error_str = match err {
            glow::INVALID_ENUM => "GL_INVALID_ENUM",
            glow::INVALID_VALUE => "GL_INVALID_VALUE",
            glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
            glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
            glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
            glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
            glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
            glow::CONTEXT_LOST => "GL_CONTEXT_LOST",
            _ => "Unknown GL error",
        };

        tracing::error!("GL error: {}", error_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_map_to_gl_enums() {
        assert_eq!(stage_to_gl(ShaderStage::Vertex), glow::VERTEX_SHADER);
        assert_eq!(stage_to_gl(ShaderStage::Fragment), glow::FRAGMENT_SHADER);
    }
}
