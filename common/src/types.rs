//! 解析対象・解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SelectedFile: アップロード対象のファイル（1回の送信の間だけ保持）
//! - AnalysisResult: 解析サービスが返すJSON（スキーマは仮定しない）
//! - ContractSummary: 既知フィールドの表示用ビュー
//! - ExportArtifact: ダウンロード用JSONファイル

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// PDFのMIMEタイプ
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// エクスポートファイル名
pub const EXPORT_FILE_NAME: &str = "analise-contrato.json";

/// エクスポートファイルのMIMEタイプ
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// アップロード可能なファイルハンドル
///
/// ブラウザでは `web_sys::File`、CLIでは [`SelectedFile`] が実装する。
pub trait PickedFile {
    /// ファイル名
    fn name(&self) -> String;
    /// 宣言されたMIMEタイプ
    fn mime_type(&self) -> String;
}

/// ユーザーが選択したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl PickedFile for SelectedFile {
    fn name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// 解析サービスのレスポンス（不透明なJSON値）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// レスポンス本文をJSONとして解析
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body).map(Self)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// インデント2の整形済みJSON
    pub fn to_pretty_json(&self) -> String {
        // Valueのシリアライズは失敗しない
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// 既知フィールドの抽出（表示用）
    pub fn summary(&self) -> Option<ContractSummary> {
        ContractSummary::from_value(&self.0)
    }

    /// ダウンロード用ファイルを生成
    pub fn export(&self) -> ExportArtifact {
        ExportArtifact {
            file_name: EXPORT_FILE_NAME,
            mime_type: EXPORT_MIME_TYPE,
            contents: self.to_pretty_json(),
        }
    }
}

/// ダウンロード用ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}

/// 契約書解析の既知フィールド
///
/// 解析サービスが通常返す項目。欠落・型違いのフィールドは `None` になり、
/// レスポンス自体を拒否することはない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractSummary {
    pub tipo_fluxo: Option<String>,        // フロー種別
    pub valor_contrato: Option<f64>,       // 契約金額
    pub valor_pagamento: Option<f64>,      // 支払金額
    pub localizacao: Option<String>,       // 所在地
    pub data_vencimento_contrato: Option<String>,
    pub data_vencimento_pagamento: Option<String>,
    pub area_responsavel: Option<String>,  // 担当部署
    pub multa: Option<f64>,                // 違約金（%）
    pub risco: Option<String>,             // リスク
    pub confianca: Option<f64>,            // 信頼度 0.0-1.0
    pub observacoes: Option<String>,       // 備考
}

impl ContractSummary {
    /// JSONオブジェクトから既知フィールドを拾う。一つも無ければNone
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
        let number = |key: &str| obj.get(key).and_then(Value::as_f64);

        let summary = Self {
            tipo_fluxo: text("tipo_fluxo"),
            valor_contrato: number("valor_contrato"),
            valor_pagamento: number("valor_pagamento"),
            localizacao: text("localizacao"),
            data_vencimento_contrato: text("data_vencimento_contrato"),
            data_vencimento_pagamento: text("data_vencimento_pagamento"),
            area_responsavel: text("area_responsavel"),
            multa: number("multa"),
            risco: text("risco"),
            confianca: number("confianca"),
            observacoes: text("observacoes"),
        };

        if summary == Self::default() {
            None
        } else {
            Some(summary)
        }
    }

    /// 表示用の (ラベル, 値) 一覧。値のある項目のみ
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        let mut push_text = |label: &'static str, v: &Option<String>| {
            if let Some(v) = v {
                rows.push((label, v.clone()));
            }
        };
        push_text("Tipo de fluxo", &self.tipo_fluxo);
        push_text("Localização", &self.localizacao);
        push_text("Vencimento do contrato", &self.data_vencimento_contrato);
        push_text("Vencimento do pagamento", &self.data_vencimento_pagamento);
        push_text("Área responsável", &self.area_responsavel);
        push_text("Risco", &self.risco);
        push_text("Observações", &self.observacoes);

        if let Some(v) = self.valor_contrato {
            rows.push(("Valor do contrato", format!("{:.2}", v)));
        }
        if let Some(v) = self.valor_pagamento {
            rows.push(("Valor do pagamento", format!("{:.2}", v)));
        }
        if let Some(v) = self.multa {
            rows.push(("Multa", format!("{}%", v)));
        }
        if let Some(v) = self.confianca {
            rows.push(("Confiança", format!("{:.0}%", v * 100.0)));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_round_trip() {
        let result = AnalysisResult::new(json!({"status": "ok", "clauses": 3}));
        let text = result.to_pretty_json();
        assert!(text.contains("\n  \"status\": \"ok\""));

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(&parsed, result.value());
    }

    #[test]
    fn test_pretty_json_preserves_key_order() {
        let result = AnalysisResult::from_body(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let text = result.to_pretty_json();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_from_body_rejects_malformed() {
        assert!(AnalysisResult::from_body("<html>oops</html>").is_err());
        assert!(AnalysisResult::from_body("").is_err());
    }

    #[test]
    fn test_from_body_accepts_any_json() {
        assert!(AnalysisResult::from_body("[1, 2, 3]").is_ok());
        assert!(AnalysisResult::from_body("null").is_ok());
        assert!(AnalysisResult::from_body("\"texto\"").is_ok());
    }

    #[test]
    fn test_export_artifact() {
        let result = AnalysisResult::new(json!({"status": "ok", "clauses": 3}));
        let artifact = result.export();
        assert_eq!(artifact.file_name, "analise-contrato.json");
        assert_eq!(artifact.mime_type, "application/json");

        let parsed = AnalysisResult::from_body(&artifact.contents).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_summary_full() {
        let result = AnalysisResult::new(json!({
            "tipo_fluxo": "RE",
            "valor_contrato": 100000.00,
            "valor_pagamento": 8333.33,
            "localizacao": "São Paulo, SP",
            "risco": "Médio",
            "confianca": 0.85,
            "observacoes": "Contrato de locação comercial"
        }));
        let summary = result.summary().unwrap();
        assert_eq!(summary.tipo_fluxo.as_deref(), Some("RE"));
        assert_eq!(summary.valor_contrato, Some(100000.0));
        assert_eq!(summary.confianca, Some(0.85));
        assert!(summary.multa.is_none());

        let rows = summary.rows();
        assert!(rows.contains(&("Valor do contrato", "100000.00".to_string())));
        assert!(rows.contains(&("Confiança", "85%".to_string())));
    }

    #[test]
    fn test_summary_tolerates_wrong_types() {
        let result = AnalysisResult::new(json!({
            "valor_contrato": "cem mil",
            "risco": 3,
            "localizacao": "Recife"
        }));
        let summary = result.summary().unwrap();
        assert!(summary.valor_contrato.is_none());
        assert!(summary.risco.is_none());
        assert_eq!(summary.localizacao.as_deref(), Some("Recife"));
    }

    #[test]
    fn test_summary_absent_for_unknown_shape() {
        assert!(AnalysisResult::new(json!({"status": "ok", "clauses": 3})).summary().is_none());
        assert!(AnalysisResult::new(json!([1, 2])).summary().is_none());
    }

    #[test]
    fn test_selected_file_picked_file() {
        let file = SelectedFile::new("contract.pdf", PDF_MIME_TYPE, vec![0x25, 0x50]);
        assert_eq!(file.name(), "contract.pdf");
        assert_eq!(file.mime_type(), "application/pdf");
    }
}
