//! Analysis command module

use crate::core::features::text_analyser::analyze_text as run_analysis;
use crate::core::features::text_analyser_logic::{details, Analyzer};
use crate::shared::error::AppResult;
use crate::shared::types::{TextAnalysisRequest, TextAnalysisResponse};

/// Analyse a document, optionally with the Unicode details
pub async fn analyze_text(request: TextAnalysisRequest, analyzer: Analyzer) -> AppResult<TextAnalysisResponse> {
    let details = request.include_details.then(|| details(&request.text));
    let statistics = run_analysis(analyzer, request.text).await?;

    Ok(TextAnalysisResponse { statistics, details })
}
