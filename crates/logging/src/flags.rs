//! Flag name tables for the `--info` / `--debug` verbosity namespaces.

/// One of the named `--info=FLAG` categories.
///
/// Mirrors the upstream rsync `info.c` flag table; each variant gates a
/// family of user-facing progress/summary messages at an independent level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum InfoFlag {
    Backup,
    Copy,
    Del,
    Flist,
    Misc,
    Mount,
    Name,
    Nonreg,
    Progress,
    Remove,
    Skip,
    Stats,
    Symsafe,
}

impl InfoFlag {
    /// All known info flags, in table order.
    pub const ALL: [InfoFlag; 13] = [
        InfoFlag::Backup,
        InfoFlag::Copy,
        InfoFlag::Del,
        InfoFlag::Flist,
        InfoFlag::Misc,
        InfoFlag::Mount,
        InfoFlag::Name,
        InfoFlag::Nonreg,
        InfoFlag::Progress,
        InfoFlag::Remove,
        InfoFlag::Skip,
        InfoFlag::Stats,
        InfoFlag::Symsafe,
    ];

    /// Parses the lowercase flag name used on the `--info=` command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match_ignore_case(name, &[
            ("backup", InfoFlag::Backup),
            ("copy", InfoFlag::Copy),
            ("del", InfoFlag::Del),
            ("flist", InfoFlag::Flist),
            ("misc", InfoFlag::Misc),
            ("mount", InfoFlag::Mount),
            ("name", InfoFlag::Name),
            ("nonreg", InfoFlag::Nonreg),
            ("progress", InfoFlag::Progress),
            ("remove", InfoFlag::Remove),
            ("skip", InfoFlag::Skip),
            ("stats", InfoFlag::Stats),
            ("symsafe", InfoFlag::Symsafe),
        ])?)
    }

    /// The lowercase name this flag is parsed from and displayed as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            InfoFlag::Backup => "backup",
            InfoFlag::Copy => "copy",
            InfoFlag::Del => "del",
            InfoFlag::Flist => "flist",
            InfoFlag::Misc => "misc",
            InfoFlag::Mount => "mount",
            InfoFlag::Name => "name",
            InfoFlag::Nonreg => "nonreg",
            InfoFlag::Progress => "progress",
            InfoFlag::Remove => "remove",
            InfoFlag::Skip => "skip",
            InfoFlag::Stats => "stats",
            InfoFlag::Symsafe => "symsafe",
        }
    }
}

/// One of the named `--debug=FLAG` categories.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum DebugFlag {
    Acl,
    Backup,
    Bind,
    Chdir,
    Cmd,
    Connect,
    Del,
    Deltasum,
    Dup,
    Exit,
    Filter,
    Flist,
    Fuzzy,
    Genr,
    Hash,
    Hlink,
    Iconv,
    Io,
    Nstr,
    Own,
    Proto,
    Recv,
    Send,
    Time,
}

impl DebugFlag {
    /// All known debug flags, in table order.
    pub const ALL: [DebugFlag; 24] = [
        DebugFlag::Acl,
        DebugFlag::Backup,
        DebugFlag::Bind,
        DebugFlag::Chdir,
        DebugFlag::Cmd,
        DebugFlag::Connect,
        DebugFlag::Del,
        DebugFlag::Deltasum,
        DebugFlag::Dup,
        DebugFlag::Exit,
        DebugFlag::Filter,
        DebugFlag::Flist,
        DebugFlag::Fuzzy,
        DebugFlag::Genr,
        DebugFlag::Hash,
        DebugFlag::Hlink,
        DebugFlag::Iconv,
        DebugFlag::Io,
        DebugFlag::Nstr,
        DebugFlag::Own,
        DebugFlag::Proto,
        DebugFlag::Recv,
        DebugFlag::Send,
        DebugFlag::Time,
    ];

    /// Parses the lowercase flag name used on the `--debug=` command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match_ignore_case(name, &[
            ("acl", DebugFlag::Acl),
            ("backup", DebugFlag::Backup),
            ("bind", DebugFlag::Bind),
            ("chdir", DebugFlag::Chdir),
            ("cmd", DebugFlag::Cmd),
            ("connect", DebugFlag::Connect),
            ("del", DebugFlag::Del),
            ("deltasum", DebugFlag::Deltasum),
            ("dup", DebugFlag::Dup),
            ("exit", DebugFlag::Exit),
            ("filter", DebugFlag::Filter),
            ("flist", DebugFlag::Flist),
            ("fuzzy", DebugFlag::Fuzzy),
            ("genr", DebugFlag::Genr),
            ("hash", DebugFlag::Hash),
            ("hlink", DebugFlag::Hlink),
            ("iconv", DebugFlag::Iconv),
            ("io", DebugFlag::Io),
            ("nstr", DebugFlag::Nstr),
            ("own", DebugFlag::Own),
            ("proto", DebugFlag::Proto),
            ("recv", DebugFlag::Recv),
            ("send", DebugFlag::Send),
            ("time", DebugFlag::Time),
        ])?)
    }

    /// The lowercase name this flag is parsed from and displayed as.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DebugFlag::Acl => "acl",
            DebugFlag::Backup => "backup",
            DebugFlag::Bind => "bind",
            DebugFlag::Chdir => "chdir",
            DebugFlag::Cmd => "cmd",
            DebugFlag::Connect => "connect",
            DebugFlag::Del => "del",
            DebugFlag::Deltasum => "deltasum",
            DebugFlag::Dup => "dup",
            DebugFlag::Exit => "exit",
            DebugFlag::Filter => "filter",
            DebugFlag::Flist => "flist",
            DebugFlag::Fuzzy => "fuzzy",
            DebugFlag::Genr => "genr",
            DebugFlag::Hash => "hash",
            DebugFlag::Hlink => "hlink",
            DebugFlag::Iconv => "iconv",
            DebugFlag::Io => "io",
            DebugFlag::Nstr => "nstr",
            DebugFlag::Own => "own",
            DebugFlag::Proto => "proto",
            DebugFlag::Recv => "recv",
            DebugFlag::Send => "send",
            DebugFlag::Time => "time",
        }
    }
}

fn match_ignore_case<T: Copy>(name: &str, table: &[(&str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}
