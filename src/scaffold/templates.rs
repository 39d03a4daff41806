//! Static file templates for a new service.

use super::{ServiceKind, ServiceName};

/// Go module path prefix that new services live under.
pub const MODULE_PREFIX: &str = "github.com/Lumina-Enterprise-Solutions/prism-erp";

/// Placeholder `cmd/server/main.go`.
pub fn entry_point(name: &ServiceName) -> String {
    format!(
        r#"package main

import (
	"log"
	"os"
	"os/signal"
	"syscall"
)

func main() {{
	log.Println("Starting {name}...")

	// TODO: Initialize service

	sigCh := make(chan os.Signal, 1)
	signal.Notify(sigCh, os.Interrupt, syscall.SIGTERM)
	<-sigCh

	log.Println("Shutting down...")
}}
"#
    )
}

/// `README.md` headed by the service's title.
pub fn readme(name: &ServiceName, kind: ServiceKind) -> String {
    format!(
        r#"# {title}

## Overview
This service is part of the Lumina Prism ERP system.

Service type: `{kind}`

## Development
```bash
go run cmd/server/main.go
```

## Testing
```bash
go test ./...
```
"#,
        title = name.title(),
    )
}
