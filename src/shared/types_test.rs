//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::settings::AppSettings;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // Bindings are written under ./bindings (or $TS_RS_EXPORT_DIR)
        StatisticsResult::export().expect("Failed to export StatisticsResult");
        TextAnalysisResponse::export().expect("Failed to export TextAnalysisResponse");
        ActionType::export().expect("Failed to export ActionType");
        ExecuteActionResponse::export().expect("Failed to export ExecuteActionResponse");
        AppSettings::export().expect("Failed to export AppSettings");
    }

    #[test]
    fn statistics_binding_uses_camel_case() {
        let decl = StatisticsResult::decl();
        assert!(decl.contains("charWithSpaces: number"));
        assert!(decl.contains("longestWord: string"));
    }

    #[test]
    fn omitted_details_binding_is_optional() {
        let decl = TextAnalysisResponse::decl();
        assert!(decl.contains("details?: TextDetails"));
        assert!(!decl.contains("TextDetails | null"));
    }
}
