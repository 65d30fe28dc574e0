//! The role-keyed rule catalogue.
//!
//! The catalogue is an immutable value built once at process start and shared
//! by handle across every analysis call. Insertion order is significant: it is
//! the tie-break order for the engine's stable sort and the order any "first
//! interesting finding" affordance walks.
//!
//! Patterns are authored in lower case because the engine matches against
//! normalized (lower-cased) text.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::rule::Rule;

static DEFAULT_CATALOG: Lazy<Arc<RuleCatalog>> = Lazy::new(|| Arc::new(RuleCatalog::new()));

/// Immutable mapping from role name to an ordered sequence of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    roles: Vec<String>,
    rules: HashMap<String, Vec<Rule>>,
}

impl RuleCatalog {
    /// The default catalogue with the built-in rule set for all four roles.
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        catalog.add_defaults();
        catalog
    }

    /// A blank catalogue for custom rule sets.
    pub fn empty() -> Self {
        RuleCatalog {
            roles: Vec::new(),
            rules: HashMap::new(),
        }
    }

    /// Process-wide shared handle to the default catalogue.
    pub fn shared() -> Arc<RuleCatalog> {
        Arc::clone(&DEFAULT_CATALOG)
    }

    /// Append a rule to a role, preserving insertion order.
    pub fn add(&mut self, role: &str, rule: Rule) {
        if !self.rules.contains_key(role) {
            self.roles.push(role.to_string());
        }
        self.rules.entry(role.to_string()).or_default().push(rule);
    }

    /// Rules for `role`, in catalogue order. Unknown roles yield an empty
    /// slice, never an error.
    pub fn rules_for(&self, role: &str) -> &[Rule] {
        self.rules.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Known role names, in the order they were first added.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Total rule count across all roles.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn add_defaults(&mut self) {
        self.add_consumidor_rules();
        self.add_prestador_rules();
        self.add_locatario_rules();
        self.add_empresario_rules();
    }

    fn add_consumidor_rules(&mut self) {
        let role = "Consumidor";

        self.add(
            role,
            Rule::new(
                "consumidor/cancelamento",
                "Proibição de cancelamento",
                &[
                    r"não poderá rescindir.*sob nenhuma hipótese",
                    r"proibição.*cancelamento",
                ],
                8,
                "Contratos de consumo geralmente permitem cancelamento. Verifique se esta \
                 cláusula está de acordo com o Código de Defesa do Consumidor.",
                "Recomendamos verificar com um especialista se esta limitação é válida no \
                 seu caso.",
                &["CDC Art. 51, IV"],
                &["rescisão", "cancelamento"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "consumidor/alteracao-unilateral",
                "Alteração unilateral do contrato",
                &[
                    r"alterar unilateralmente",
                    r"a qualquer tempo.*sem (aviso|notificação)",
                    r"modificar.*a seu exclusivo critério",
                ],
                9,
                "Cláusulas que permitem ao fornecedor alterar o contrato sozinho, sem sua \
                 anuência, são consideradas abusivas em relações de consumo.",
                "Solicite a remoção da cláusula ou a previsão de anuência expressa do \
                 consumidor para qualquer alteração.",
                &["CDC Art. 51, XIII"],
                &["alteração", "unilateral"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "consumidor/renuncia-direitos",
                "Renúncia antecipada de direitos",
                &[r"renuncia.*direito", r"abre mão de.*indenização"],
                8,
                "A renúncia antecipada a direitos garantidos por lei é nula em contratos de \
                 consumo.",
                "Não assine antes de remover a renúncia ou de obter orientação jurídica \
                 sobre seu alcance.",
                &["CDC Art. 51, I"],
                &["renúncia"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "consumidor/multa-excessiva",
                "Multa desproporcional por rescisão",
                &[
                    r"multa (superior|acima) de",
                    r"multa de [3-9][0-9]\s*%",
                    r"perda (total|integral) dos valores pagos",
                ],
                7,
                "Multas de rescisão muito altas ou a perda integral dos valores pagos podem \
                 caracterizar vantagem exagerada do fornecedor.",
                "Negocie um percentual proporcional ao serviço já prestado e guarde \
                 comprovantes de pagamento.",
                &["CDC Art. 52, § 1º", "CDC Art. 51, IV"],
                &["multa", "rescisão"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "consumidor/renovacao-automatica",
                "Renovação automática sem aviso",
                &[r"renovação automática", r"renovado automaticamente"],
                6,
                "Renovações automáticas sem comunicação prévia dificultam o cancelamento e \
                 geram cobranças inesperadas.",
                "Peça a inclusão de aviso prévio obrigatório antes de cada renovação e anote \
                 a data limite de cancelamento.",
                &["CDC Art. 6º, III"],
                &["renovação"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "consumidor/foro-eleicao",
                "Eleição de foro desfavorável",
                &[r"fica eleito o foro", r"foro da comarca de"],
                5,
                "A eleição de foro distante do seu domicílio dificulta sua defesa em uma \
                 eventual disputa.",
                "Solicite a adoção do foro do seu domicílio, como prevê a legislação de \
                 consumo.",
                &["CDC Art. 101, I", "CPC Art. 63, § 3º"],
                &["foro"],
            ),
        );
    }

    fn add_prestador_rules(&mut self) {
        let role = "Prestador de serviços";

        self.add(
            role,
            Rule::new(
                "prestador/responsabilidade-ilimitada",
                "Responsabilidade ilimitada",
                &[
                    r"responsabilidade ilimitada",
                    r"responderá por (todos|quaisquer) (os )?danos",
                ],
                9,
                "Responder por quaisquer danos, sem teto, expõe o prestador a um risco \
                 desproporcional ao valor do contrato.",
                "Negocie um limite de responsabilidade vinculado ao valor do contrato e \
                 exclusão de danos indiretos.",
                &["Código Civil Art. 927"],
                &["responsabilidade"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "prestador/pagamento-condicionado",
                "Pagamento condicionado a critério do contratante",
                &[
                    r"pagamento.*somente após aprovação",
                    r"condicionado à aprovação.*exclusivo critério",
                ],
                7,
                "Pagamentos condicionados à aprovação subjetiva do contratante permitem \
                 retenção indefinida de valores por serviço já prestado.",
                "Defina critérios objetivos de aceite e prazo máximo para aprovação, com \
                 aceite tácito após o prazo.",
                &["Código Civil Art. 315"],
                &["pagamento"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "prestador/rescisao-sem-aviso",
                "Rescisão sem aviso prévio",
                &[
                    r"rescindir.*sem aviso prévio",
                    r"a qualquer momento.*sem (aviso|notificação|indenização)",
                ],
                6,
                "A rescisão imediata e sem aviso deixa o prestador sem tempo de recompor \
                 sua agenda e sua receita.",
                "Inclua aviso prévio mínimo de 30 dias ou indenização compensatória \
                 proporcional.",
                &["Código Civil Art. 473, parágrafo único"],
                &["rescisão"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "prestador/exclusividade",
                "Exclusividade sem contrapartida",
                &[
                    r"exclusividade",
                    r"não poderá prestar serviços a (terceiros|outros)",
                ],
                6,
                "Exclusividade sem remuneração mínima garantida impede o prestador de \
                 manter outras fontes de renda.",
                "Aceite exclusividade apenas com contrapartida financeira mínima mensal ou \
                 restrinja-a a concorrentes diretos.",
                &["Código Civil Art. 122"],
                &["exclusividade"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "prestador/cessao-pi",
                "Cessão ampla de propriedade intelectual",
                &[
                    r"cede.*(todos|a totalidade) (os |dos )?direitos",
                    r"propriedade intelectual.*integralmente ao contratante",
                ],
                5,
                "A cessão total e definitiva de direitos autorais pode abranger obras \
                 futuras e métodos próprios do prestador.",
                "Delimite a cessão ao objeto do contrato e reserve métodos, bibliotecas e \
                 conhecimentos prévios.",
                &["Lei 9.610/98 Art. 49"],
                &["propriedade intelectual"],
            ),
        );
    }

    fn add_locatario_rules(&mut self) {
        let role = "Locatário";

        self.add(
            role,
            Rule::new(
                "locatario/reajuste-irregular",
                "Reajuste em periodicidade menor que a anual",
                &[
                    r"reajust\w+ (semestralmente|trimestralmente|mensalmente)",
                    r"reajuste a cada (três|seis) meses",
                ],
                8,
                "A legislação veda o reajuste do aluguel em periodicidade inferior a um \
                 ano.",
                "Exija a periodicidade anual e um índice oficial de correção definido em \
                 contrato.",
                &["Lei 10.192/01 Art. 2º, § 1º"],
                &["reajuste", "aluguel"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "locatario/despesas-extraordinarias",
                "Transferência de despesas extraordinárias",
                &[
                    r"despesas extraordinárias.*(locatário|inquilino)",
                    r"obras estruturais.*por conta do (locatário|inquilino)",
                ],
                7,
                "Despesas extraordinárias de condomínio e obras estruturais são, por lei, \
                 obrigação do locador.",
                "Risque a cláusula ou delimite expressamente quais despesas ordinárias \
                 cabem ao locatário.",
                &["Lei 8.245/91 Art. 22, X"],
                &["despesas", "condomínio"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "locatario/multa-integral",
                "Multa de rescisão sem proporcionalidade",
                &[
                    r"multa integral.*independentemente do prazo",
                    r"multa de (três|3) aluguéis.*qualquer tempo",
                ],
                7,
                "A multa por devolução antecipada deve ser proporcional ao período restante \
                 do contrato.",
                "Peça a redução proporcional expressa, conforme a Lei do Inquilinato.",
                &["Lei 8.245/91 Art. 4º"],
                &["multa", "rescisão"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "locatario/benfeitorias",
                "Renúncia à indenização por benfeitorias",
                &[
                    r"renuncia.*benfeitorias",
                    r"benfeitorias.*sem direito a indenização",
                ],
                6,
                "A renúncia genérica impede o reembolso até de benfeitorias necessárias \
                 feitas com autorização do locador.",
                "Negocie o direito a indenização ao menos para benfeitorias necessárias e \
                 úteis autorizadas por escrito.",
                &["Lei 8.245/91 Art. 35"],
                &["benfeitorias"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "locatario/vistoria",
                "Dispensa de vistoria de entrada",
                &[r"dispensa.*vistoria", r"sem necessidade de vistoria"],
                4,
                "Sem laudo de vistoria de entrada, danos preexistentes podem ser cobrados \
                 do locatário na devolução do imóvel.",
                "Exija vistoria detalhada com fotos anexada ao contrato antes de receber as \
                 chaves.",
                &["Lei 8.245/91 Art. 22, V"],
                &["vistoria"],
            ),
        );
    }

    fn add_empresario_rules(&mut self) {
        let role = "Empresário";

        self.add(
            role,
            Rule::new(
                "empresario/garantia-pessoal",
                "Garantia pessoal dos sócios",
                &[
                    r"aval.*sócios",
                    r"garantia pessoal.*patrimônio",
                    r"respondem solidariamente.*sócios",
                ],
                8,
                "Aval ou garantia pessoal dos sócios alcança o patrimônio particular e \
                 anula a separação patrimonial da empresa.",
                "Tente substituir por garantia real limitada ou seguro-garantia e delimite \
                 o valor máximo garantido.",
                &["Código Civil Art. 391"],
                &["garantia", "sócios"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "empresario/nao-concorrencia",
                "Não concorrência excessiva",
                &[
                    r"não concorrência.*(cinco|dez|[5-9]) anos",
                    r"não poderá atuar no mesmo ramo",
                ],
                7,
                "Cláusulas de não concorrência sem limite razoável de prazo, território e \
                 atividade podem inviabilizar a operação futura do negócio.",
                "Restrinja a vedação a prazo de até dois anos, ao território relevante e à \
                 atividade específica do contrato.",
                &["Código Civil Art. 1.147"],
                &["concorrência"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "empresario/reajuste-unilateral",
                "Reajuste unilateral de preços",
                &[
                    r"tarifas.*reajustadas unilateralmente",
                    r"alterar os preços.*sem anuência",
                ],
                7,
                "Preço deixado ao arbítrio exclusivo de uma das partes torna a obrigação \
                 potencialmente nula.",
                "Vincule reajustes a índice oficial e a periodicidade definida em \
                 contrato.",
                &["Código Civil Art. 489"],
                &["preço", "reajuste"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "empresario/confissao-divida",
                "Confissão antecipada de dívida",
                &[
                    r"confissão de dívida",
                    r"reconhece.*líquida, certa e exigível",
                ],
                6,
                "O reconhecimento antecipado de dívida líquida e certa cria título \
                 executivo e elimina discussões futuras sobre o valor.",
                "Só assine com os valores conferidos e com previsão de quitação parcial \
                 documentada.",
                &["CPC Art. 784, III"],
                &["dívida"],
            ),
        );

        self.add(
            role,
            Rule::new(
                "empresario/sigilo-indeterminado",
                "Sigilo por prazo indeterminado",
                &[
                    r"sigilo.*por prazo indeterminado",
                    r"confidencialidade.*sem limite de tempo",
                ],
                4,
                "Obrigações de confidencialidade perpétuas são de difícil cumprimento e \
                 auditoria ao longo do tempo.",
                "Delimite o sigilo a um prazo definido após o término do contrato, salvo \
                 para segredos de indústria.",
                &["Lei 9.279/96 Art. 195, XI"],
                &["confidencialidade"],
            ),
        );
    }
}
