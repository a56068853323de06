use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::Section;
use tracing::info;

use crate::{
    config::{OUTPUT_DIR, OUTPUT_FILE, PageConfig},
    fragment::{load_banner, load_content},
    templates::{Page, render},
};

/// Build once into OUTPUT_DIR using current working directory.
pub fn build_once() -> color_eyre::Result<PathBuf> {
    let root =
        std::env::current_dir().with_note(|| "While getting the current working directory")?;
    build_at(&root)
}

/// Render the page for the project at `root` and write it to
/// `root/public/index.html`. Returns the written path.
pub fn build_at(root: &Path) -> color_eyre::Result<PathBuf> {
    let ctx = BuildCtx::load_at(root)?;

    Pipeline::new(ctx).load()?.render().emit()
}

/// Render the page for the project at `root` without writing anything.
pub fn render_at(root: &Path) -> color_eyre::Result<String> {
    let ctx = BuildCtx::load_at(root)?;

    Ok(Pipeline::new(ctx).load()?.render().into_html())
}

struct BuildCtx {
    root: PathBuf,
    output_dir: PathBuf,
    config: PageConfig,
}

impl BuildCtx {
    fn load_at(root: &Path) -> color_eyre::Result<Self> {
        let root = root.to_path_buf();
        let output_dir = root.join(OUTPUT_DIR);
        let config = PageConfig::load_at(&root)?;

        Ok(Self {
            root,
            output_dir,
            config,
        })
    }
}

fn load_page(ctx: &BuildCtx) -> color_eyre::Result<Page> {
    let content = load_content(&ctx.root, &ctx.config)?;
    let banner = load_banner(&ctx.root)?;

    Ok(Page {
        title: ctx.config.title.clone(),
        group_id: ctx.config.group_id,
        content,
        banner,
    })
}

fn emit_page(ctx: &BuildCtx, html: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(&ctx.output_dir)
        .with_note(|| format!("While creating {}", ctx.output_dir.display()))?;
    let out_path = ctx.output_dir.join(OUTPUT_FILE);
    fs::write(&out_path, html).with_note(|| format!("While writing {}", out_path.display()))?;
    info!(path = %out_path.display(), bytes = html.len(), "wrote page");
    Ok(out_path)
}

trait PipelineStage {}
/// Pipeline typestate driver
struct Pipeline<S: PipelineStage> {
    ctx: BuildCtx,
    state: S,
}

struct Loaded(Page);
impl PipelineStage for Loaded {}
struct Rendered(String);
impl PipelineStage for Rendered {}
impl PipelineStage for () {}

// initial state
impl Pipeline<()> {
    fn new(ctx: BuildCtx) -> Self {
        Self { ctx, state: () }
    }

    fn load(self) -> color_eyre::Result<Pipeline<Loaded>> {
        let page = load_page(&self.ctx)?;
        Ok(Pipeline {
            ctx: self.ctx,
            state: Loaded(page),
        })
    }
}

impl Pipeline<Loaded> {
    fn render(self) -> Pipeline<Rendered> {
        let html = render(&self.state.0);
        Pipeline {
            ctx: self.ctx,
            state: Rendered(html),
        }
    }
}

impl Pipeline<Rendered> {
    fn emit(self) -> color_eyre::Result<PathBuf> {
        emit_page(&self.ctx, &self.state.0)
    }

    fn into_html(self) -> String {
        self.state.0
    }
}
