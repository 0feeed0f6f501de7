// SPDX-License-Identifier: MPL-2.0

//! The adapter entry points.
//!
//! Each entry point inspects the flag word, invokes the native open
//! primitive in exactly one of its two call shapes, and returns the result
//! verbatim. Nothing is retried, translated, or logged on failure; the
//! ambient OS error of the native call is the error the caller sees.

use std::{
    ffi::CStr,
    io,
    os::fd::{FromRawFd, OwnedFd, RawFd},
};

use libc::{c_int, c_uint, mode_t};
use log::debug;

use crate::{AccessMode, CreationFlags, StatusFlags};

/// Opens `path` the way the legacy `open64` entry point does.
///
/// The flag word selects the native call shape. With `O_CREAT` set, or with
/// the whole `O_TMPFILE` combination present, the native primitive receives
/// a permission mode: `mode`, or empty permissions if the caller supplied
/// none (the typed `Option` stands in for the variadic slot, so an absent
/// mode is a defined default rather than an undefined read). With neither,
/// the primitive is invoked without a mode and `mode` is never read.
///
/// On success the new descriptor is returned as an owned handle; on failure
/// the native primitive's error is surfaced untranslated.
pub fn open64(path: &CStr, flags: c_int, mode: Option<mode_t>) -> io::Result<OwnedFd> {
    debug!(
        "path = {:?}, flags = {:?} | {:?}, mode = {:?}",
        path,
        CreationFlags::from_bits_truncate(flags as u32),
        StatusFlags::from_bits_truncate(flags as u32),
        mode
    );

    let fd = if requires_mode(flags) {
        unsafe { libc::open(path.as_ptr(), flags, mode.unwrap_or(0) as c_uint) }
    } else {
        unsafe { libc::open(path.as_ptr(), flags) }
    };
    owned_or_errno(fd)
}

/// Directory-relative variant of [`open64`].
///
/// `dirfd` anchors relative paths; pass `libc::AT_FDCWD` to resolve them
/// against the current working directory, which makes this a superset of
/// [`open64`]. The mode-forwarding rule is the same.
pub fn openat64(
    dirfd: RawFd,
    path: &CStr,
    flags: c_int,
    mode: Option<mode_t>,
) -> io::Result<OwnedFd> {
    debug!(
        "dirfd = {}, path = {:?}, flags = {:?} | {:?}, mode = {:?}",
        dirfd,
        path,
        CreationFlags::from_bits_truncate(flags as u32),
        StatusFlags::from_bits_truncate(flags as u32),
        mode
    );

    let fd = if requires_mode(flags) {
        unsafe { libc::openat(dirfd, path.as_ptr(), flags, mode.unwrap_or(0) as c_uint) }
    } else {
        unsafe { libc::openat(dirfd, path.as_ptr(), flags) }
    };
    owned_or_errno(fd)
}

/// Legacy `creat64`: create (or truncate) `path` for writing with `mode`.
pub fn creat64(path: &CStr, mode: mode_t) -> io::Result<OwnedFd> {
    let flags =
        AccessMode::O_WRONLY as u32 | CreationFlags::O_CREAT.bits() | CreationFlags::O_TRUNC.bits();
    open64(path, flags as c_int, Some(mode))
}

/// Whether this flag word obliges the caller to supply a permission mode.
fn requires_mode(flags: c_int) -> bool {
    CreationFlags::from_bits_truncate(flags as u32).requires_mode()
}

fn owned_or_errno(fd: c_int) -> io::Result<OwnedFd> {
    if fd < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(unsafe { OwnedFd::from_raw_fd(fd) })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn plain_flag_words_need_no_mode() {
        assert!(!requires_mode(libc::O_RDONLY));
        assert!(!requires_mode(libc::O_WRONLY | libc::O_TRUNC));
        assert!(!requires_mode(libc::O_RDWR | libc::O_APPEND | libc::O_CLOEXEC));
    }

    #[test]
    fn creating_flag_words_need_a_mode() {
        assert!(requires_mode(libc::O_WRONLY | libc::O_CREAT));
        assert!(requires_mode(libc::O_RDWR | libc::O_CREAT | libc::O_EXCL));
        assert!(requires_mode(libc::O_WRONLY | libc::O_TMPFILE));
    }

    #[test]
    fn tmpfile_match_is_exact_not_subset() {
        // O_TMPFILE is a two-bit combination that incorporates O_DIRECTORY;
        // neither constituent bit alone selects the mode-taking shape.
        assert!(!requires_mode(libc::O_RDONLY | libc::O_DIRECTORY));
        let tmpfile_bit = libc::O_TMPFILE & !libc::O_DIRECTORY;
        assert!(!requires_mode(libc::O_WRONLY | tmpfile_bit));
    }

    #[test]
    fn access_mode_extraction() {
        assert_eq!(
            AccessMode::from_flags(libc::O_RDONLY | libc::O_CLOEXEC).unwrap(),
            AccessMode::O_RDONLY
        );
        assert_eq!(
            AccessMode::from_flags(libc::O_WRONLY | libc::O_CREAT).unwrap(),
            AccessMode::O_WRONLY
        );
        assert!(AccessMode::from_flags(libc::O_RDWR).unwrap().is_readable());
        assert!(AccessMode::from_flags(libc::O_RDWR).unwrap().is_writable());

        let err = AccessMode::from_flags(libc::O_ACCMODE).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EINVAL));
    }

    #[test]
    fn creat_composes_the_historical_flag_word() {
        let flags = AccessMode::O_WRONLY as u32
            | CreationFlags::O_CREAT.bits()
            | CreationFlags::O_TRUNC.bits();
        assert_eq!(
            flags as c_int,
            libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC
        );
        assert!(requires_mode(flags as c_int));
    }
}
