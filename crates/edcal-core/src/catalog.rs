//! The hand-authored default content catalog.
//!
//! Twelve months, three articles each, authored once and shipped with the
//! application. The catalog is the canonical structure that load-time
//! reconciliation merges persisted progress onto: months can never be lost or
//! duplicated because this list is the source of truth for which months
//! exist.

use crate::models::{Article, ContentStatus, MonthPlan};

fn article(id: &str, category: &str, title: &str, keyword: &str, intent: &str) -> Article {
    Article {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        keyword: keyword.to_string(),
        intent: intent.to_string(),
        status: ContentStatus::Pending,
    }
}

fn month(id: u8, month: &str, focus: &str, strategy: &str, articles: Vec<Article>) -> MonthPlan {
    MonthPlan {
        id,
        month: month.to_string(),
        focus: focus.to_string(),
        strategy: strategy.to_string(),
        articles,
    }
}

/// Returns a freshly built copy of the default 12-month plan.
///
/// All articles start out pending. Callers own the returned value and may
/// mutate statuses freely; the catalog itself has no runtime state.
pub fn default_plan() -> Vec<MonthPlan> {
    vec![
        month(
            0,
            "Janeiro",
            "Planejamento & Distratos",
            "Início de ano, foco em financeiro e distratos imobiliários.",
            vec![
                article(
                    "jan1",
                    "Imobiliário",
                    "Comprei imóvel na planta e me arrependi: Distrato 2026",
                    "distrato",
                    "Educativo",
                ),
                article(
                    "jan2",
                    "Execução",
                    "Defesa em Execução Cível: Protegendo bens",
                    "defesa execução",
                    "Autoridade",
                ),
                article(
                    "jan3",
                    "Inventário",
                    "Planejamento Sucessório: Começando o ano",
                    "planejamento",
                    "Conscientização",
                ),
            ],
        ),
        month(
            1,
            "Fevereiro",
            "Atrasos & Cobrança",
            "Volta às aulas/obras. Foco em atrasos de entrega e cobranças.",
            vec![
                article(
                    "fev1",
                    "Imobiliário",
                    "Atraso na entrega da obra: Indenizações",
                    "atraso obra",
                    "Conversão",
                ),
                article(
                    "fev2",
                    "Execução",
                    "Cobrança de Aluguel: Execução vs Despejo",
                    "aluguel",
                    "Autoridade",
                ),
                article(
                    "fev3",
                    "Imobiliário",
                    "Congelamento do Saldo Devedor",
                    "saldo devedor",
                    "Educativo",
                ),
            ],
        ),
        month(
            2,
            "Março",
            "Consumidor & IR",
            "Mês do consumidor e impacto legal na declaração de IR.",
            vec![
                article(
                    "mar1",
                    "Inventário",
                    "Custos do Inventário Extrajudicial 2026",
                    "custo inventário",
                    "Educativo",
                ),
                article(
                    "mar2",
                    "Imobiliário",
                    "Cuidados na Compra de Imóvel na Planta",
                    "compra planta",
                    "Prevenção",
                ),
                article(
                    "mar3",
                    "Execução",
                    "Busca de Bens: Sisbajud e Renajud",
                    "busca bens",
                    "Autoridade",
                ),
            ],
        ),
        month(
            3,
            "Abril",
            "Prazos & Multas",
            "Multas de inventário e vícios ocultos em construções recentes.",
            vec![
                article(
                    "abr1",
                    "Inventário",
                    "Multa no Inventário: Prazos Críticos",
                    "multa inventário",
                    "Urgência",
                ),
                article(
                    "abr2",
                    "Imobiliário",
                    "Vícios Construtivos e Garantia Decenal",
                    "vícios obra",
                    "Educativo",
                ),
                article(
                    "abr3",
                    "Execução",
                    "Título Extrajudicial: Documentos Essenciais",
                    "título extrajudicial",
                    "Educativo",
                ),
            ],
        ),
        month(
            4,
            "Maio",
            "Família & Imóveis",
            "Impacto dos regimes de bens na compra e venda de imóveis.",
            vec![
                article(
                    "mai1",
                    "Imobiliário",
                    "Compra de Imóvel e Regime de Bens",
                    "regime bens",
                    "Educativo",
                ),
                article(
                    "mai2",
                    "Inventário",
                    "Divergência entre Herdeiros: Soluções Práticas",
                    "herdeiros",
                    "Solução",
                ),
                article(
                    "mai3",
                    "Execução",
                    "Penhora de Salário: Novos Entendimentos STJ",
                    "penhora salário",
                    "Atualidade",
                ),
            ],
        ),
        month(
            5,
            "Junho",
            "Revisão Contratual",
            "Meio de ano. Revisão de juros abusivos e fraudes patrimoniais.",
            vec![
                article(
                    "jun1",
                    "Imobiliário",
                    "Juros de Obra: Quando cobrar a devolução?",
                    "juros obra",
                    "Conversão",
                ),
                article(
                    "jun2",
                    "Execução",
                    "Fraude à Execução: Doação de bens para filhos",
                    "fraude",
                    "Autoridade",
                ),
                article(
                    "jun3",
                    "Inventário",
                    "Venda de Imóvel durante Inventário: Alvará",
                    "venda espólio",
                    "Solução",
                ),
            ],
        ),
        month(
            6,
            "Julho",
            "Investidores",
            "Mês focado em leilões, arrematação e regularização.",
            vec![
                article(
                    "jul1",
                    "Imobiliário",
                    "Leilões e Dívidas de Condomínio: Quem paga?",
                    "leilão",
                    "Nicho",
                ),
                article(
                    "jul2",
                    "Imobiliário",
                    "Distrato por Culpa da Construtora: 100% devolução",
                    "culpa construtora",
                    "Conversão",
                ),
                article(
                    "jul3",
                    "Execução",
                    "Prescrição de Dívidas: Como alegar?",
                    "prescrição",
                    "Educativo",
                ),
            ],
        ),
        month(
            7,
            "Agosto",
            "Pais & Sucessão",
            "Dia dos pais. Foco em Doação em Vida vs Inventário.",
            vec![
                article(
                    "ago1",
                    "Inventário",
                    "Doação em Vida vs Inventário: Custos",
                    "doação",
                    "Comparativo",
                ),
                article(
                    "ago2",
                    "Execução",
                    "Bem de Família e Penhora: Limites Legais",
                    "bem família",
                    "Defesa",
                ),
                article(
                    "ago3",
                    "Imobiliário",
                    "Taxa de Corretagem no Distrato: É devida?",
                    "corretagem",
                    "Dúvida",
                ),
            ],
        ),
        month(
            8,
            "Setembro",
            "Consumidor & Contratos",
            "Semana do cliente. Foco em revisão de cláusulas abusivas.",
            vec![
                article(
                    "set1",
                    "Imobiliário",
                    "Cláusulas Abusivas em Contratos Imobiliários",
                    "cláusulas",
                    "Educativo",
                ),
                article(
                    "set2",
                    "Consumidor",
                    "Direito de Arrependimento em Compras Online",
                    "arrependimento",
                    "Informativo",
                ),
                article(
                    "set3",
                    "Execução",
                    "Defesa do Consumidor contra Bancos",
                    "bancos",
                    "Autoridade",
                ),
            ],
        ),
        month(
            9,
            "Outubro",
            "Patrimônio & Proteção",
            "Mês focado em holding e proteção patrimonial.",
            vec![
                article(
                    "out1",
                    "Empresarial",
                    "Holding Familiar: Como proteger seu patrimônio",
                    "holding",
                    "Autoridade",
                ),
                article(
                    "out2",
                    "Imobiliário",
                    "Regularização de Imóveis via Usucapião",
                    "usucapião",
                    "Solução",
                ),
                article(
                    "out3",
                    "Inventário",
                    "Inventário Negativo: Quando é necessário?",
                    "inventário negativo",
                    "Dúvida",
                ),
            ],
        ),
        month(
            10,
            "Novembro",
            "Reta Final de Crédito",
            "Recuperação de ativos antes do fechamento do ano.",
            vec![
                article(
                    "nov1",
                    "Execução",
                    "Como agilizar a cobrança de dívidas",
                    "cobrança",
                    "Urgência",
                ),
                article(
                    "nov2",
                    "Imobiliário",
                    "Compra de Imóveis em Leilão: Riscos e Ganhos",
                    "leilão",
                    "Investimento",
                ),
                article(
                    "nov3",
                    "Geral",
                    "Impacto da Black Friday nos Prazos de Entrega",
                    "prazos",
                    "Alerta",
                ),
            ],
        ),
        month(
            11,
            "Dezembro",
            "Retrospectiva & Recesso",
            "Dicas práticas para o período de recesso e prazos.",
            vec![
                article(
                    "dez1",
                    "Geral",
                    "Recesso Forense 2026 e a Contagem de Prazos",
                    "recesso",
                    "Informativo",
                ),
                article(
                    "dez2",
                    "Imobiliário",
                    "Atraso de Obra e Lucros Cessantes no Fim de Ano",
                    "atraso",
                    "Prático",
                ),
                article(
                    "dez3",
                    "Inventário",
                    "Regularizando bens de heranças antigas",
                    "bens antigos",
                    "Complexidade",
                ),
            ],
        ),
    ]
}

/// Number of months in the catalog. Reconciliation and tests rely on this
/// count never changing without a catalog update.
pub const MONTH_COUNT: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twelve_months_with_ordinal_ids() {
        let plan = default_plan();
        assert_eq!(plan.len(), MONTH_COUNT);
        for (i, m) in plan.iter().enumerate() {
            assert_eq!(m.id as usize, i);
            assert_eq!(m.articles.len(), 3);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let plan = default_plan();
        let mut seen = std::collections::HashSet::new();
        for m in &plan {
            for a in &m.articles {
                assert!(seen.insert(a.id.clone()), "duplicate article id {}", a.id);
            }
        }
    }

    #[test]
    fn catalog_articles_start_pending() {
        assert!(default_plan()
            .iter()
            .flat_map(|m| m.articles.iter())
            .all(|a| a.status == ContentStatus::Pending));
    }
}
