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

//! Errors raised while building a shader program.

use crate::driver::ShaderStage;

use std::fmt;
use std::io;
use std::path::PathBuf;

/// An error raised while loading, compiling or linking a shader program.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A shader source file could not be read.
    ///
    /// Raised before any driver call is made.
    Read {
        /// The path that failed to read.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// A shader stage failed to compile.
    Compile {
        /// The stage whose source was rejected.
        stage: ShaderStage,

        /// The driver's compile log.
        log: String,
    },

    /// The compiled stages failed to link into a program.
    Link {
        /// The driver's link log.
        log: String,
    },

    /// The driver failed to allocate a shader or program object.
    Driver(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read { path, source } => {
                write!(f, "failed to read shader source `{}`: {}", path.display(), source)
            }
            Error::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {}", log.trim_end())
            }
            Error::Link { log } => {
                write!(f, "shader program failed to link: {}", log.trim_end())
            }
            Error::Driver(message) => write!(f, "driver error: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
