//! Prepares the bounded data summary and prompt for the external insights
//! service and shields the rest of the app from its failures.

use serde::Serialize;

use crate::{
    core::report::{CastingStats, PartnerStat, SummaryStats},
    domain::{Casting, CastingStatus},
    errors::ArtfinError,
};

/// Shown whenever the insights call fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Não foi possível gerar a análise. Verifique se o serviço de insights está configurado.";
/// Shown when the service answers with an empty body.
pub const EMPTY_MESSAGE: &str = "Sem insights no momento.";

const MAX_PARTNERS: usize = 5;
const MAX_RECENT_CASTINGS: usize = 5;

const PROMPT_TEMPLATE: &str = "\
Atue como um manager de carreira artística e consultor financeiro.
Analise os dados de um Ator/Atriz:

Dados: {data}

Forneça uma análise curta em Markdown:
1. **Conversão de Testes**: Analise a taxa de aprovação (Aprovados/Total). Se estiver baixa, sugira foco em renovar material ou cursos. Se alta, sugira aumentar o cachê.
2. **Saúde Financeira**: Analise o fluxo de caixa e os recebíveis pendentes (Cachês a cair).
3. **Estratégia**: Baseado nos parceiros (Agências), onde focar energia?
4. **Dica**: Dica prática sobre gestão de carreira ou reserva financeira para entressafra.
";

#[derive(Debug, Clone, Serialize)]
struct RecentCasting<'a> {
    role: &'a str,
    status: CastingStatus,
    agency: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct InsightsData<'a> {
    summary: &'a SummaryStats,
    casting_stats: &'a CastingStats,
    top_partners: &'a [PartnerStat],
    recent_castings: Vec<RecentCasting<'a>>,
}

/// Prepared request for the insights collaborator.
#[derive(Debug, Clone)]
pub struct InsightsRequest {
    pub prompt: String,
}

/// Serializes the bounded summary — stats, funnel, top-5 partners, up to 5
/// most recent castings (client, status, agency only) — into the fixed
/// analysis prompt.
pub fn build_request(
    summary: &SummaryStats,
    casting_stats: &CastingStats,
    partners: &[PartnerStat],
    castings: &[Casting],
) -> Result<InsightsRequest, ArtfinError> {
    let data = InsightsData {
        summary,
        casting_stats,
        top_partners: &partners[..partners.len().min(MAX_PARTNERS)],
        recent_castings: castings
            .iter()
            .take(MAX_RECENT_CASTINGS)
            .map(|c| RecentCasting {
                role: &c.client,
                status: c.status,
                agency: &c.agency,
            })
            .collect(),
    };
    let context = serde_json::to_string(&data)?;
    Ok(InsightsRequest {
        prompt: PROMPT_TEMPLATE.replace("{data}", &context),
    })
}

/// External text-generation collaborator. Implementations may hit the network;
/// tests plug in fakes.
pub trait InsightsClient {
    fn request_insights(&self, request: &InsightsRequest) -> Result<String, ArtfinError>;
}

/// Posts the prompt as JSON to a configured endpoint and extracts the `text`
/// field of the response body.
pub struct HttpInsightsClient {
    endpoint: String,
}

impl HttpInsightsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl InsightsClient for HttpInsightsClient {
    fn request_insights(&self, request: &InsightsRequest) -> Result<String, ArtfinError> {
        let response = ureq::post(&self.endpoint)
            .send_json(serde_json::json!({ "prompt": request.prompt }))
            .map_err(|err| ArtfinError::Insights(err.to_string()))?;
        let body: serde_json::Value = response
            .into_json()
            .map_err(|err| ArtfinError::Insights(err.to_string()))?;
        Ok(body
            .get("text")
            .and_then(|text| text.as_str())
            .unwrap_or(EMPTY_MESSAGE)
            .to_string())
    }
}

/// Runs the request and converts every failure into the fixed fallback text.
/// Never propagates an error to the caller.
pub fn fetch_insights(client: &dyn InsightsClient, request: &InsightsRequest) -> String {
    match client.request_insights(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_MESSAGE.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "insights request failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
