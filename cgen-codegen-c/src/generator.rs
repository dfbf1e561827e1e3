use std::{path::Path, sync::Arc};

use cgen_codegen::{
    Diagnostics, GenerateResult, LanguageCodegen, PreviewFile, TemplateRenderer,
    generation::{CommandRunner, PostProcess, PostProcessCommand, PostProcessOutcome},
};
use cgen_config::GeneratorConfig;
use cgen_core::File;
use cgen_ir::ApiSpec;
use eyre::{Result, WrapErr};

use crate::{
    CPostProcessor, Client,
    context::{ApiContext, ModelContext},
};

/// C client generator.
///
/// Hands the contexts of a resolved [`Client`] to a [`TemplateRenderer`] and
/// runs the post-generation hook on each written file.
pub struct Generator<'a> {
    client: Client<'a>,
    renderer: &'a dyn TemplateRenderer,
    hook: CPostProcessor,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "c"
    }

    fn file_extension(&self) -> &'static str {
        "c"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .render_all()?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                file_type: file.file_type().clone(),
                content: file.content().to_string(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.render_all()? {
            let path = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", file.path().display()))?;
            tracing::debug!(path = %path.display(), file_type = %file.file_type(), "wrote file");

            if self.hook.after_file_written(&path, file.file_type()) == PostProcessOutcome::Succeeded
            {
                result.post_processed.push(path.clone());
            }
            result.written.push(path);
        }

        result.diagnostics = self.diagnostics().snapshot();
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// Create a generator with post-processing disabled.
    pub fn new(
        spec: &'a ApiSpec,
        config: &'a GeneratorConfig,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        let client = Client::new(spec, config);
        let hook = CPostProcessor::disabled(Arc::clone(client.diagnostics()));
        Self {
            client,
            renderer,
            hook,
        }
    }

    /// Run `command` through `runner` after each eligible file is written.
    pub fn with_post_process(
        mut self,
        command: Option<PostProcessCommand>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        self.hook = CPostProcessor::new(command, runner, Arc::clone(self.diagnostics()));
        self
    }

    pub fn client(&self) -> &Client<'a> {
        &self.client
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        self.client.diagnostics()
    }

    pub fn models(&self) -> Vec<ModelContext> {
        self.client.models()
    }

    pub fn apis(&self) -> Vec<ApiContext> {
        self.client.apis()
    }

    /// Render every file of the client without writing anything.
    pub fn render_all(&self) -> Result<Vec<File>> {
        self.client
            .files()?
            .into_iter()
            .map(|planned| {
                let file = planned.file;
                let content = self
                    .renderer
                    .render(file.template, &planned.context)
                    .wrap_err_with(|| {
                        format!("failed to render {} from {}", file.path, file.template)
                    })?;
                Ok(File::new(file.path, content, file.file_type))
            })
            .collect()
    }
}
