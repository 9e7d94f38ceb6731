/// Operating systems the toolchain recognizes in filename suffixes.
pub const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux",
    "nacl", "netbsd", "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

/// Architectures the toolchain recognizes in filename suffixes.
pub const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips", "mipsle",
    "mips64", "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le", "riscv",
    "riscv64", "s390", "s390x", "sparc", "sparc64", "wasm",
];

pub fn is_known_os(s: &str) -> bool {
    KNOWN_OS.contains(&s)
}

pub fn is_known_arch(s: &str) -> bool {
    KNOWN_ARCH.contains(&s)
}
