// SPDX-License-Identifier: MPL-2.0

use std::io;

use libc::c_int;

/// The read/write selector encoded in the low bits of an open flag word.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum AccessMode {
    /// read only
    O_RDONLY = libc::O_RDONLY,
    /// write only
    O_WRONLY = libc::O_WRONLY,
    /// read write
    O_RDWR = libc::O_RDWR,
}

impl AccessMode {
    /// Extracts the access mode from a full flag word.
    ///
    /// The selector is not a bitset: it occupies the `O_ACCMODE` bits as a
    /// two-bit value, and the fourth encoding is invalid.
    pub fn from_flags(flags: c_int) -> io::Result<Self> {
        match flags & libc::O_ACCMODE {
            libc::O_RDONLY => Ok(AccessMode::O_RDONLY),
            libc::O_WRONLY => Ok(AccessMode::O_WRONLY),
            libc::O_RDWR => Ok(AccessMode::O_RDWR),
            _ => Err(io::Error::from_raw_os_error(libc::EINVAL)),
        }
    }

    pub fn is_readable(&self) -> bool {
        match *self {
            AccessMode::O_RDONLY | AccessMode::O_RDWR => true,
            _ => false,
        }
    }

    pub fn is_writable(&self) -> bool {
        match *self {
            AccessMode::O_WRONLY | AccessMode::O_RDWR => true,
            _ => false,
        }
    }
}
