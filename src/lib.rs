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

//! Loads, compiles and links GPU shader programs.
//!
//! This crate reads vertex and fragment shader source from disk (or takes it
//! in memory), submits it to the graphics driver for compilation and linking,
//! and wraps the resulting program object in a type with `install`/`uninstall`
//! lifecycle calls. The driver itself sits behind the [`Driver`] trait; the
//! `shader-program-glow` crate implements it on top of [`glow`].
//!
//! [`glow`]: https://crates.io/crates/glow

pub mod driver;
mod error;
mod program;

pub use driver::{Driver, ShaderStage};
pub use error::Error;
pub use program::ShaderProgram;

/// Runs a closure when dropped, unless it is forgotten first.
pub(crate) struct CallOnDrop<F: FnMut()>(pub(crate) F);

impl<F: FnMut()> Drop for CallOnDrop<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}
