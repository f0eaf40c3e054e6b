use crate::error::{FlagParseError, split_flag_token};
use crate::flags::{DebugFlag, InfoFlag};

/// Per-flag verbosity levels for the `--info` namespace.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InfoConfig {
    pub backup: u8,
    pub copy: u8,
    pub del: u8,
    pub flist: u8,
    pub misc: u8,
    pub mount: u8,
    pub name: u8,
    pub nonreg: u8,
    pub progress: u8,
    pub remove: u8,
    pub skip: u8,
    pub stats: u8,
    pub symsafe: u8,
}

impl InfoConfig {
    /// Reads the configured level for `flag`.
    #[must_use]
    pub const fn get(self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Backup => self.backup,
            InfoFlag::Copy => self.copy,
            InfoFlag::Del => self.del,
            InfoFlag::Flist => self.flist,
            InfoFlag::Misc => self.misc,
            InfoFlag::Mount => self.mount,
            InfoFlag::Name => self.name,
            InfoFlag::Nonreg => self.nonreg,
            InfoFlag::Progress => self.progress,
            InfoFlag::Remove => self.remove,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
            InfoFlag::Symsafe => self.symsafe,
        }
    }

    /// Sets the configured level for `flag`.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        let field = match flag {
            InfoFlag::Backup => &mut self.backup,
            InfoFlag::Copy => &mut self.copy,
            InfoFlag::Del => &mut self.del,
            InfoFlag::Flist => &mut self.flist,
            InfoFlag::Misc => &mut self.misc,
            InfoFlag::Mount => &mut self.mount,
            InfoFlag::Name => &mut self.name,
            InfoFlag::Nonreg => &mut self.nonreg,
            InfoFlag::Progress => &mut self.progress,
            InfoFlag::Remove => &mut self.remove,
            InfoFlag::Skip => &mut self.skip,
            InfoFlag::Stats => &mut self.stats,
            InfoFlag::Symsafe => &mut self.symsafe,
        };
        *field = level;
    }

    /// Sets every flag to `level` at once (`--info=ALL` / `--info=NONE`).
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }

    /// Applies one parsed `--info=` token, e.g. `"name2"` or `"copy"` (level defaults to 1).
    pub fn apply_token(&mut self, token: &str) -> Result<(), FlagParseError> {
        let (name, level) = split_flag_token(token)?;
        let flag = InfoFlag::from_name(name).ok_or_else(|| FlagParseError::UnknownFlag(token.to_string()))?;
        self.set(flag, level.unwrap_or(1));
        Ok(())
    }
}

/// Per-flag verbosity levels for the `--debug` namespace.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DebugConfig {
    pub acl: u8,
    pub backup: u8,
    pub bind: u8,
    pub chdir: u8,
    pub cmd: u8,
    pub connect: u8,
    pub del: u8,
    pub deltasum: u8,
    pub dup: u8,
    pub exit: u8,
    pub filter: u8,
    pub flist: u8,
    pub fuzzy: u8,
    pub genr: u8,
    pub hash: u8,
    pub hlink: u8,
    pub iconv: u8,
    pub io: u8,
    pub nstr: u8,
    pub own: u8,
    pub proto: u8,
    pub recv: u8,
    pub send: u8,
    pub time: u8,
}

impl DebugConfig {
    /// Reads the configured level for `flag`.
    #[must_use]
    pub const fn get(self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Acl => self.acl,
            DebugFlag::Backup => self.backup,
            DebugFlag::Bind => self.bind,
            DebugFlag::Chdir => self.chdir,
            DebugFlag::Cmd => self.cmd,
            DebugFlag::Connect => self.connect,
            DebugFlag::Del => self.del,
            DebugFlag::Deltasum => self.deltasum,
            DebugFlag::Dup => self.dup,
            DebugFlag::Exit => self.exit,
            DebugFlag::Filter => self.filter,
            DebugFlag::Flist => self.flist,
            DebugFlag::Fuzzy => self.fuzzy,
            DebugFlag::Genr => self.genr,
            DebugFlag::Hash => self.hash,
            DebugFlag::Hlink => self.hlink,
            DebugFlag::Iconv => self.iconv,
            DebugFlag::Io => self.io,
            DebugFlag::Nstr => self.nstr,
            DebugFlag::Own => self.own,
            DebugFlag::Proto => self.proto,
            DebugFlag::Recv => self.recv,
            DebugFlag::Send => self.send,
            DebugFlag::Time => self.time,
        }
    }

    /// Sets the configured level for `flag`.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        let field = match flag {
            DebugFlag::Acl => &mut self.acl,
            DebugFlag::Backup => &mut self.backup,
            DebugFlag::Bind => &mut self.bind,
            DebugFlag::Chdir => &mut self.chdir,
            DebugFlag::Cmd => &mut self.cmd,
            DebugFlag::Connect => &mut self.connect,
            DebugFlag::Del => &mut self.del,
            DebugFlag::Deltasum => &mut self.deltasum,
            DebugFlag::Dup => &mut self.dup,
            DebugFlag::Exit => &mut self.exit,
            DebugFlag::Filter => &mut self.filter,
            DebugFlag::Flist => &mut self.flist,
            DebugFlag::Fuzzy => &mut self.fuzzy,
            DebugFlag::Genr => &mut self.genr,
            DebugFlag::Hash => &mut self.hash,
            DebugFlag::Hlink => &mut self.hlink,
            DebugFlag::Iconv => &mut self.iconv,
            DebugFlag::Io => &mut self.io,
            DebugFlag::Nstr => &mut self.nstr,
            DebugFlag::Own => &mut self.own,
            DebugFlag::Proto => &mut self.proto,
            DebugFlag::Recv => &mut self.recv,
            DebugFlag::Send => &mut self.send,
            DebugFlag::Time => &mut self.time,
        };
        *field = level;
    }

    /// Sets every flag to `level` at once (`--debug=ALL` / `--debug=NONE`).
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }

    /// Applies one parsed `--debug=` token, e.g. `"deltasum2"` or `"recv"` (level defaults to 1).
    pub fn apply_token(&mut self, token: &str) -> Result<(), FlagParseError> {
        let (name, level) = split_flag_token(token)?;
        let flag = DebugFlag::from_name(name).ok_or_else(|| FlagParseError::UnknownFlag(token.to_string()))?;
        self.set(flag, level.unwrap_or(1));
        Ok(())
    }
}

/// The combined `--info` / `--debug` verbosity state for a session, derived either from
/// repeated `-v` flags or from explicit `--info=`/`--debug=` token lists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    pub info: InfoConfig,
    pub debug: DebugConfig,
}

impl VerbosityConfig {
    /// Derives the per-flag levels rsync assigns for a given `-v` repeat count.
    ///
    /// `nonreg` is always on, even at `--quiet` (level 0); the remaining info
    /// flags switch on at level 1 and step up at level 2. Debug flags follow
    /// rsync's own staggered enablement: the "primary" group (I/O and hashing
    /// internals) turns on one level later than info, the "secondary" group
    /// (protocol bookkeeping) one level later still.
    #[must_use]
    pub fn from_verbose_level(level: u8) -> Self {
        let mut info = InfoConfig::default();
        info.nonreg = 1;
        if level >= 1 {
            info.copy = 1;
            info.del = 1;
            info.flist = 1;
            info.stats = 1;
            info.symsafe = 1;
            info.misc = 1;
            info.name = 1;
        }
        if level >= 2 {
            info.misc = 2;
            info.name = 2;
            info.backup = 1;
            info.mount = 1;
            info.remove = 1;
            info.skip = 1;
        }

        let primary = level.saturating_sub(1);
        let secondary = level.saturating_sub(2);
        let mut debug = DebugConfig::default();
        debug.bind = primary;
        debug.cmd = primary;
        debug.connect = primary;
        debug.del = primary;
        debug.deltasum = primary;
        debug.dup = primary;
        debug.filter = primary;
        debug.flist = primary;
        debug.iconv = primary;
        debug.exit = secondary;
        debug.acl = secondary;
        debug.backup = secondary;
        debug.chdir = secondary;
        debug.fuzzy = secondary;
        debug.genr = secondary;
        debug.hash = secondary;
        debug.hlink = secondary;
        debug.io = secondary;
        debug.nstr = secondary;
        debug.own = secondary;
        debug.proto = secondary;
        debug.recv = secondary;
        debug.send = secondary;
        debug.time = secondary;

        Self { info, debug }
    }

    /// Applies a comma-separated `--info=` flag list (`ALL`/`NONE` are recognized specially).
    pub fn apply_info_flags(&mut self, flags: &str) -> Result<(), FlagParseError> {
        apply_flag_list(flags, |level| self.info.set_all(level), |token| self.info.apply_token(token))
    }

    /// Applies a comma-separated `--debug=` flag list (`ALL`/`NONE` are recognized specially).
    pub fn apply_debug_flags(&mut self, flags: &str) -> Result<(), FlagParseError> {
        apply_flag_list(flags, |level| self.debug.set_all(level), |token| self.debug.apply_token(token))
    }
}

fn apply_flag_list(
    flags: &str,
    mut set_all: impl FnMut(u8),
    mut apply_token: impl FnMut(&str) -> Result<(), FlagParseError>,
) -> Result<(), FlagParseError> {
    if flags.eq_ignore_ascii_case("ALL") {
        set_all(1);
        return Ok(());
    }
    if flags.eq_ignore_ascii_case("NONE") {
        set_all(0);
        return Ok(());
    }
    for token in flags.split(',') {
        let token = token.trim();
        if !token.is_empty() {
            apply_token(token)?;
        }
    }
    Ok(())
}
