//! Workspace tooling root package (hosts rusty-hook pre-commit configuration).
