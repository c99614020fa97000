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

//! Builds and binds linked shader programs.

use crate::driver::{Driver, ShaderStage};
use crate::error::Error;
use crate::CallOnDrop;

use std::fmt;
use std::fs;
use std::mem;
use std::path::Path;

/// A linked GPU shader program.
///
/// A value of this type always holds a usable program object: construction
/// either compiles and links both stages or fails before any value exists.
/// The program object is deleted when this value is dropped.
pub struct ShaderProgram<D: Driver> {
    driver: D,
    program: D::Program,
}

impl<D: Driver> ShaderProgram<D> {
    /// Read vertex and fragment shader source from `vertex_path` and
    /// `fragment_path`, then compile and link them.
    ///
    /// Both files are read in full before the driver is touched, so an
    /// unreadable path fails with [`Error::Read`] without compiling anything.
    pub fn from_paths(
        driver: D,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;

        Self::from_source(driver, &vertex_source, &fragment_source)
    }

    /// Compile and link a program from in-memory source text.
    ///
    /// Fails with [`Error::Compile`] if either stage is rejected, carrying
    /// the stage identity and the driver's compile log, or with
    /// [`Error::Link`] if the stages compile but do not link. Every driver
    /// resource created before the failure is released again.
    pub fn from_source(
        driver: D,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, Error> {
        let program = link_stages(&driver, vertex_source, fragment_source)?;

        Ok(Self { driver, program })
    }

    /// Make this the context's active program.
    pub fn install(&self) {
        self.driver.use_program(Some(self.program));
    }

    /// Clear the context's active program.
    ///
    /// Harmless when nothing is installed.
    pub fn uninstall(&self) {
        self.driver.use_program(None);
    }

    /// The raw program handle.
    pub fn program(&self) -> D::Program {
        self.program
    }

    /// A reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: Driver> fmt::Debug for ShaderProgram<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram").finish_non_exhaustive()
    }
}

impl<D: Driver> Drop for ShaderProgram<D> {
    fn drop(&mut self) {
        self.driver.delete_program(self.program);
    }
}

fn read_source(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn link_stages<D: Driver + ?Sized>(
    driver: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<D::Program, Error> {
    let vertex = compile_stage(driver, ShaderStage::Vertex, vertex_source)?;
    let delete_vertex = CallOnDrop(|| driver.delete_shader(vertex));

    let fragment = compile_stage(driver, ShaderStage::Fragment, fragment_source)?;
    let delete_fragment = CallOnDrop(|| driver.delete_shader(fragment));

    let program = driver.create_program().map_err(Error::Driver)?;
    let delete_program = CallOnDrop(|| driver.delete_program(program));

    driver.attach_shader(program, vertex);
    driver.attach_shader(program, fragment);
    driver.link_program(program);
    let linked = driver.program_link_status(program);

    // The stages are not needed past this point either way; detach them
    // before the guards delete them.
    driver.detach_shader(program, vertex);
    driver.detach_shader(program, fragment);
    drop(delete_fragment);
    drop(delete_vertex);

    if !linked {
        let log = driver.program_info_log(program);
        tracing::error!("shader program failed to link: {}", log.trim_end());
        return Err(Error::Link { log });
    }

    mem::forget(delete_program);
    tracing::trace!("linked shader program");
    Ok(program)
}

fn compile_stage<D: Driver + ?Sized>(
    driver: &D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, Error> {
    tracing::trace!("compiling {} shader ({} bytes)", stage, source.len());

    let shader = driver.create_shader(stage).map_err(Error::Driver)?;
    let delete_shader = CallOnDrop(|| driver.delete_shader(shader));

    driver.shader_source(shader, source);
    driver.compile_shader(shader);

    if !driver.shader_compile_status(shader) {
        let log = driver.shader_info_log(shader);
        tracing::error!("{} shader failed to compile: {}", stage, log.trim_end());
        return Err(Error::Compile { stage, log });
    }

    mem::forget(delete_shader);
    Ok(shader)
}
