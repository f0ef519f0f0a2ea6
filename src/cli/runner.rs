//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PageRequest;
use crate::error::{Error, Result};
use crate::pagination::{window, ArrayPaginator, Paginate, Paginator};
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing results to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Run the CLI command, writing results to `out`
    pub fn run_with_output(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Page {
                input,
                page,
                page_size,
            } => self.page(out, input, *page, *page_size),
            Commands::Pages { input, page_size } => self.pages(out, input, *page_size),
            Commands::Info {
                total,
                page,
                page_size,
            } => self.info(out, *total, *page, *page_size),
        }
    }

    /// Page request from the `--request` file, overridden by explicit flags
    fn request(&self, page: Option<i64>, page_size: Option<i64>) -> Result<PageRequest> {
        let mut request = match &self.cli.request {
            Some(path) => PageRequest::from_file(path)?,
            None => PageRequest::default(),
        };
        if let Some(page) = page {
            request = request.with_page(page);
        }
        if let Some(page_size) = page_size {
            request = request.with_page_size(page_size);
        }
        debug!(page = request.page, page_size = request.page_size, "resolved page request");
        Ok(request)
    }

    /// Print one page
    fn page(
        &self,
        out: &mut impl Write,
        input: &Path,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<()> {
        let items = load_items(input)?;
        let request = self.request(page, page_size)?;
        let paginator = ArrayPaginator::from_request(items, &request);

        info!(
            page = paginator.current_page(),
            last_page = paginator.last_page(),
            total = paginator.total(),
            "paginated {}",
            input.display()
        );
        self.emit(out, &paginator)
    }

    /// Print every page
    fn pages(&self, out: &mut impl Write, input: &Path, page_size: Option<i64>) -> Result<()> {
        let items = load_items(input)?;
        let request = self.request(None, page_size)?.with_page(1);
        let paginator = ArrayPaginator::from_request(items, &request);

        let mut emitted = 0;
        for page in paginator.pages() {
            self.emit(out, &page)?;
            emitted += 1;
        }

        info!(pages = emitted, total = paginator.total(), "paginated {}", input.display());
        Ok(())
    }

    /// Print metadata for a page of `total` items without any data
    fn info(
        &self,
        out: &mut impl Write,
        total: u64,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<()> {
        let request = self.request(page, page_size)?;
        let (page, page_size) = request.normalized();
        let metadata = Paginator::<Value>::new(Vec::new(), total, request.page, request.page_size);
        let range = window(total, page, page_size);
        let (from, to) = if range.is_empty() {
            (None, None)
        } else {
            (Some(range.start), Some(range.end - 1))
        };

        let value = json!({
            "total": metadata.total(),
            "page": metadata.current_page(),
            "pageSize": metadata.page_size(),
            "lastPage": metadata.last_page(),
            "hasMore": metadata.has_more(),
            "count": range.len(),
            "from": from,
            "to": to,
        });
        self.write_value(out, &value)
    }

    fn emit<P: Paginate<Value> + ?Sized>(&self, out: &mut impl Write, paginator: &P) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => paginator.to_json()?,
            OutputFormat::Pretty => paginator.to_json_pretty()?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }

    fn write_value(&self, out: &mut impl Write, value: &Value) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

/// Read a JSON array of items from a file
fn load_items(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        Error::config(format!(
            "{} must contain a JSON array: {e}",
            path.display()
        ))
    })
}
