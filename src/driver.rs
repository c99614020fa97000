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

//! Defines the driver backend for shader-program.

use std::fmt;

/// A pipeline stage that shader source can be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex stage.
    Vertex,

    /// The fragment stage.
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

/// The graphics driver operations needed to build and bind a shader program.
///
/// This corresponds to a small slice of the OpenGL shader API, and the
/// `shader-program-glow` crate implements it directly over [`glow`]. The
/// methods take `&self` because the driver value stands for a graphics
/// context that is conventionally confined to a single thread; callers are
/// expected to serialize access to it.
///
/// Allocation methods report failure as the driver's own diagnostic string,
/// which [`ShaderProgram`] surfaces as [`Error::Driver`].
///
/// [`glow`]: https://crates.io/crates/glow
/// [`ShaderProgram`]: crate::ShaderProgram
/// [`Error::Driver`]: crate::Error::Driver
pub trait Driver {
    /// A compiled (or compiling) shader stage handle.
    type Shader: Copy;

    /// A linked (or linking) program object handle.
    type Program: Copy;

    /// Create a new, empty shader stage.
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;

    /// Replace the source text of a shader stage.
    fn shader_source(&self, shader: Self::Shader, source: &str);

    /// Compile a shader stage from its current source.
    fn compile_shader(&self, shader: Self::Shader);

    /// Whether the last compilation of this stage succeeded.
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;

    /// The driver's diagnostic log for this stage.
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// Delete a shader stage.
    fn delete_shader(&self, shader: Self::Shader);

    /// Create a new, empty program object.
    fn create_program(&self) -> Result<Self::Program, String>;

    /// Attach a compiled stage to a program.
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Detach a stage from a program.
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Link the attached stages into a usable program.
    fn link_program(&self, program: Self::Program);

    /// Whether the last link of this program succeeded.
    fn program_link_status(&self, program: Self::Program) -> bool;

    /// The driver's diagnostic log for this program.
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Delete a program object.
    fn delete_program(&self, program: Self::Program);

    /// Set or clear the context's active program.
    ///
    /// `None` leaves no program bound, matching `glUseProgram(0)`.
    fn use_program(&self, program: Option<Self::Program>);
}

impl<D: Driver + ?Sized> Driver for &D {
    type Shader = D::Shader;
    type Program = D::Program;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        (**self).create_shader(stage)
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        (**self).shader_source(shader, source)
    }

    fn compile_shader(&self, shader: Self::Shader) {
        (**self).compile_shader(shader)
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        (**self).shader_compile_status(shader)
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        (**self).shader_info_log(shader)
    }

    fn delete_shader(&self, shader: Self::Shader) {
        (**self).delete_shader(shader)
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        (**self).create_program()
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        (**self).attach_shader(program, shader)
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        (**self).detach_shader(program, shader)
    }

    fn link_program(&self, program: Self::Program) {
        (**self).link_program(program)
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        (**self).program_link_status(program)
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        (**self).program_info_log(program)
    }

    fn delete_program(&self, program: Self::Program) {
        (**self).delete_program(program)
    }

    fn use_program(&self, program: Option<Self::Program>) {
        (**self).use_program(program)
    }
}
