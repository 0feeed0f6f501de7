// SPDX-License-Identifier: MPL-2.0

use bitflags::bitflags;

bitflags! {
    pub struct StatusFlags: u32 {
        /// append on each write
        const O_APPEND = libc::O_APPEND as u32;
        /// non block
        const O_NONBLOCK = libc::O_NONBLOCK as u32;
        /// synchronized I/O, data
        const O_DSYNC = libc::O_DSYNC as u32;
        /// signal-driven I/O
        const O_ASYNC = libc::O_ASYNC as u32;
        /// direct I/O
        const O_DIRECT = libc::O_DIRECT as u32;
        /// on x86_64, O_LARGEFILE is 0
        /// not update st_atime
        const O_NOATIME = libc::O_NOATIME as u32;
        /// synchronized I/O, data and metadata
        const O_SYNC = libc::O_SYNC as u32;
        /// equivalent of POSIX.1's O_EXEC
        const O_PATH = libc::O_PATH as u32;
    }
}
