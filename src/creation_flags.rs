// SPDX-License-Identifier: MPL-2.0

use bitflags::bitflags;

bitflags! {
    pub struct CreationFlags: u32 {
        /// create file if it does not exist
        const O_CREAT = libc::O_CREAT as u32;
        /// error if CREATE and the file exists
        const O_EXCL = libc::O_EXCL as u32;
        /// not become the process's controlling terminal
        const O_NOCTTY = libc::O_NOCTTY as u32;
        /// truncate file upon open
        const O_TRUNC = libc::O_TRUNC as u32;
        /// file is a directory
        const O_DIRECTORY = libc::O_DIRECTORY as u32;
        /// pathname is not a symbolic link
        const O_NOFOLLOW = libc::O_NOFOLLOW as u32;
        /// close on exec
        const O_CLOEXEC = libc::O_CLOEXEC as u32;
        /// the temporary-file bit on its own, never valid alone
        const _O_TMPFILE = libc::O_TMPFILE as u32 & !(libc::O_DIRECTORY as u32);
        /// create an unnamed temporary regular file
        /// O_TMPFILE is (_O_TMPFILE | O_DIRECTORY)
        const O_TMPFILE = libc::O_TMPFILE as u32;
    }
}

impl CreationFlags {
    /// Whether a flag word carrying these bits obliges the caller to also
    /// supply a permission mode.
    ///
    /// True when `O_CREAT` is set or when the word contains the whole
    /// `O_TMPFILE` combination. `O_TMPFILE` is a multi-bit pattern, so the
    /// test is containment of the full combination; a word with only some
    /// of its bits (e.g. a plain `O_DIRECTORY` open) does not qualify.
    pub fn requires_mode(&self) -> bool {
        self.contains(CreationFlags::O_CREAT) || self.contains(CreationFlags::O_TMPFILE)
    }
}
