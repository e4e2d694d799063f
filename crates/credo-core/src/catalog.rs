use crate::error::{CredoError, Result};

/// Version stamped into every shipped practice block, embedded at compile
/// time the same way the binary version is.
pub const PRACTICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named, versioned practices payload.
#[derive(Debug, Clone, Copy)]
pub struct Practice {
    pub tag: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    pub body: &'static str,
}

const PRACTICES: &[Practice] = &[
    Practice {
        tag: "go",
        title: "Go engineering practices",
        version: PRACTICE_VERSION,
        body: GO_PRACTICES,
    },
    Practice {
        tag: "rust",
        title: "Rust engineering practices",
        version: PRACTICE_VERSION,
        body: RUST_PRACTICES,
    },
];

/// All shipped practices, in display order.
pub fn all() -> &'static [Practice] {
    PRACTICES
}

/// Look up a practice by tag.
pub fn find(tag: &str) -> Result<&'static Practice> {
    PRACTICES
        .iter()
        .find(|p| p.tag == tag)
        .ok_or_else(|| CredoError::UnknownPractice {
            requested: tag.to_string(),
            supported: supported_tags(),
        })
}

/// Comma-separated list of supported tags, for error messages and help text.
pub fn supported_tags() -> String {
    PRACTICES
        .iter()
        .map(|p| p.tag)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Shipped practice documents
// ---------------------------------------------------------------------------

const GO_PRACTICES: &str = r#"## Go Engineering Practices

Conventions for structuring and testing Go services. Read before writing or
reviewing any Go code in this project.

### Layered Architecture

Organize each service into layers with dependencies pointing inward only:

```
cmd/<binary>/        entrypoint: flag parsing, wiring, nothing else
internal/handler/    transport edge: HTTP/gRPC decode, validate, respond
internal/service/    use cases: orchestration, transactions, authorization
internal/domain/     entities and business rules: no I/O, no framework types
internal/storage/    repositories: SQL, caches, external stores
```

- The domain layer imports nothing from the other layers. Handlers never
  touch storage directly; they go through a service.
- Define interfaces where they are consumed, not where they are implemented:
  `service` declares the repository interface it needs, `storage` satisfies
  it.
- Constructors take their dependencies as interface parameters. Wiring
  happens once, in `cmd/`.

### Errors

- Wrap with context at each boundary: `fmt.Errorf("load user %d: %w", id, err)`.
- Sentinel errors (`ErrNotFound`) live in the package that produces them;
  callers branch with `errors.Is`.
- Handlers map domain errors to status codes in one place. No stringly-typed
  error matching.

### Testing Strategy

- Table-driven tests for anything with more than two input shapes. Name the
  cases; a failing case name should tell you what broke without reading the
  test body.
- Test services against real in-memory implementations of their repository
  interfaces, not generated mocks. Reserve mocks for third-party boundaries
  you cannot run locally.
- Storage tests run against a real database in CI (dockerized). Mark them
  with build tags so `go test ./...` stays fast.
- One assertion style per repo. Keep `got`/`want` ordering consistent.

### Packages

- Package names are short nouns that read at the call site: `storage.User`,
  not `userstoragepkg.UserModel`.
- No `util`, `common`, or `helpers` packages. If a helper has no home, its
  abstraction is wrong.
- `internal/` for everything that is not a published API.
"#;

const RUST_PRACTICES: &str = r#"## Rust Engineering Practices

Conventions for structuring and testing Rust crates. Read before writing or
reviewing any Rust code in this project.

### Crate Layout

- One concern per module; re-export the public surface from `lib.rs`.
- Binaries stay thin: argument parsing and wiring in `main.rs`, everything
  testable in library modules.
- Split into workspace crates only along real dependency boundaries
  (core logic vs. CLI vs. server), not by file count.

### Errors

- Library crates define an error enum with `thiserror` and export a
  `Result<T>` alias. Variants carry the context a caller needs to act.
- Application edges use `anyhow`, attaching context at each boundary with
  `.context(...)`. Print the full chain on exit.
- No `unwrap()` or `expect()` outside tests and provably-infallible cases.

### Ownership

- Take `&str`/`&Path` parameters, return owned types. Don't force `String`
  allocation onto callers for lookups.
- Reach for lifetimes before `clone()`, and for `clone()` before `Rc`.
  Interior mutability is a last resort and gets a comment.

### Testing Strategy

- Unit tests live in a `#[cfg(test)] mod tests` at the bottom of the module
  they cover. Integration tests that drive the binary live in `tests/`.
- Test behavior through the public API. If a test needs a private function,
  the module boundary is drawn wrong.
- Filesystem tests use `tempfile::TempDir`; never write into the source
  tree or rely on test execution order.
"#;
