//! The informational page and its server-rendered code generator.

use super::{options_query, AppState, GenerateQuery};
use crate::api::error::ApiResult;
use crate::api::extract::ApiQuery;
use crate::catalog::{render, DisplayFragment, CATALOG};
use crate::generator::{
    generate, AiApi, CodeView, DisplayMode, FileId, GenerationOptions, SpeechApi,
};
use askama::Template;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};
use tracing::debug;

struct SelectOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

struct FormState {
    extension_name: String,
    speech: Vec<SelectOption>,
    ai: Vec<SelectOption>,
    display: Vec<SelectOption>,
}

impl FormState {
    fn new(options: &GenerationOptions) -> Self {
        Self {
            extension_name: options.extension_name.clone(),
            speech: SpeechApi::ALL
                .iter()
                .map(|api| SelectOption {
                    value: api.as_str(),
                    label: api.label(),
                    selected: *api == options.speech_api,
                })
                .collect(),
            ai: AiApi::ALL
                .iter()
                .map(|api| SelectOption {
                    value: api.as_str(),
                    label: api.label(),
                    selected: *api == options.ai_api,
                })
                .collect(),
            display: DisplayMode::ALL
                .iter()
                .map(|mode| SelectOption {
                    value: mode.as_str(),
                    label: mode.label(),
                    selected: *mode == options.display_mode,
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "page/index.html", escape = "html")]
struct IndexPage {
    components: DisplayFragment,
    speech_rows: DisplayFragment,
    ai_rows: DisplayFragment,
    workarounds: DisplayFragment,
    setup_steps: DisplayFragment,
    tips: DisplayFragment,
    form: FormState,
    code_view: Option<DisplayFragment>,
    archive_href: String,
}

impl IndexPage {
    fn new(
        form_options: &GenerationOptions,
        code_view: Option<DisplayFragment>,
    ) -> Result<Self, askama::Error> {
        Ok(Self {
            components: render(CATALOG.components)?,
            speech_rows: render(CATALOG.speech_apis)?,
            ai_rows: render(CATALOG.ai_apis)?,
            workarounds: render(CATALOG.workarounds)?,
            setup_steps: render(CATALOG.setup_steps)?,
            tips: render(CATALOG.usage_tips)?,
            form: FormState::new(form_options),
            code_view,
            archive_href: format!(
                "/api/generate/archive?{}",
                options_query(form_options, None)
            ),
        })
    }

    fn into_html(self) -> ApiResult<Html<String>> {
        Ok(Html(self.render()?))
    }
}

/// Creates the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/generate", get(generate_page))
}

/// GET / - Guide page with an empty generator form.
async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    IndexPage::new(&state.defaults.options(), None)?.into_html()
}

/// GET /generate - Guide page with the code view for the submitted options.
///
/// `tab` picks the visible file; an unknown tab is a 404 rather than a
/// fallback to some other file.
async fn generate_page(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GenerateQuery>,
) -> ApiResult<Html<String>> {
    let options = query.options(&state.defaults);
    let mut view = CodeView::new(generate(&options)?);
    if let Some(tab) = query.tab.as_deref() {
        view.select_tab_key(tab)?;
    }
    debug!("Rendering {} for '{}'", view.active(), options.extension_name);

    let fragment = view.render_html(|id: FileId| {
        format!("/generate?{}#generator", options_query(&options, Some(id)))
    })?;
    IndexPage::new(&options, Some(fragment))?.into_html()
}
