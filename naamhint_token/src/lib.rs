//! 名字切分：把文本切成“可能是人名”的词组 token。
//!
//! 规则（与编辑器宿主里观察到的行为保持一致）：
//! - 词 = 连续非空白 + 其后的空白；拼接全部词可还原除开头空白外的原文
//! - 词组从“大写开头”的词出发，长度 1..=max_group_size，先短后长
//! - join + trim 之后为空或短于 min_token_length 时，
//!   该起点**停止生长**：短词组不发出，更长的也不再尝试

use naamhint_core::error::TokenizeError;
use naamhint_core::model::{Span, Token};
use naamhint_core::tokenizer::Tokenizer;

/// 名字切分器（实现 core 的 `Tokenizer`）。
pub struct NaamTokenizer {
    /// 词组最长覆盖多少个词
    max_group_size: usize,
    /// token 最短长度（trim 后，按字符数）
    min_token_length: usize,
}

impl Default for NaamTokenizer {
    fn default() -> Self {
        Self {
            max_group_size: 5,
            min_token_length: 3,
        }
    }
}

impl NaamTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置词组最大词数；非法值回退为 1。
    pub fn max_group_size(mut self, n: usize) -> Self {
        self.max_group_size = n.max(1);
        self
    }

    /// 设置 token 最短字符数；非法值回退为 1。
    pub fn min_token_length(mut self, n: usize) -> Self {
        self.min_token_length = n.max(1);
        self
    }
}

/// 把文本切成“非空白 run + 尾随空白”的词；开头的空白不属于任何词。
fn split_woorden(tekst: &str) -> Vec<&str> {
    let mut uit: Vec<&str> = Vec::new();
    let mut begin: Option<usize> = None;
    let mut in_staart = false;
    for (i, ch) in tekst.char_indices() {
        if ch.is_whitespace() {
            if begin.is_some() {
                in_staart = true;
            }
        } else if in_staart {
            // 前一个词在这里结束（含它的尾随空白）
            uit.push(&tekst[begin.unwrap_or(0)..i]);
            begin = Some(i);
            in_staart = false;
        } else if begin.is_none() {
            begin = Some(i);
        }
    }
    if let Some(b) = begin {
        uit.push(&tekst[b..]);
    }
    uit
}

/// 规则 U：首字符等于它自己的单字符大写映射即可开组。
///
/// 非字母（数字/标点）恒真：与观察到的宿主行为保持一致，
/// 不在这里收紧（见 DESIGN.md）。
fn opent_groep(woord: &str) -> bool {
    let Some(eerste) = woord.chars().next() else {
        return false;
    };
    let mut hoofd = eerste.to_uppercase();
    hoofd.next() == Some(eerste) && hoofd.next().is_none()
}

impl Tokenizer for NaamTokenizer {
    fn tokenize(&self, tekst: &str) -> Result<Vec<Token>, TokenizeError> {
        let woorden = split_woorden(tekst);

        // voor[i] = 下标 i 之前所有词的累计字节长度，
        // 作为子串定位的起点（防止撞上更早的重复子串）
        let mut voor: Vec<usize> = Vec::with_capacity(woorden.len());
        let mut som: usize = 0;
        for w in &woorden {
            voor.push(som);
            som += w.len();
        }

        let mut tokens: Vec<Token> = Vec::new();
        for i in 0..woorden.len() {
            if !opent_groep(woorden[i]) {
                continue;
            }
            // clamp 到剩余词数：越界词组与整尾词组相同，不重复发出
            let max_len = self.max_group_size.min(woorden.len() - i);
            for len in 1..=max_len {
                let samengevoegd: String = woorden[i..i + len].concat();
                let groep = samengevoegd.trim();
                if groep.is_empty() || groep.chars().count() < self.min_token_length {
                    break;
                }

                let mut vanaf = voor[i].min(tekst.len());
                // 开头空白不计入 voor，前缀和可能落在多字节字符内部：向后对齐
                while !tekst.is_char_boundary(vanaf) {
                    vanaf += 1;
                }
                let Some(rel) = tekst[vanaf..].find(groep) else {
                    return Err(TokenizeError::SpanNotFound {
                        text: groep.to_string(),
                        vanaf,
                    });
                };
                let start = vanaf + rel;
                tokens.push(Token {
                    span: Span::new(start, start + groep.len()),
                    text: groep.to_string(),
                });
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naamhint_core::context::ScanContext;
    use naamhint_core::engine::Engine;
    use naamhint_core::kandidaat::Kandidaat;

    fn tokens(tekst: &str) -> Vec<Token> {
        NaamTokenizer::new().tokenize(tekst).unwrap()
    }

    #[test]
    fn felix_ruiz_arrived() {
        let uit = tokens("Felix Ruiz arrived");
        let teksten: Vec<&str> = uit.iter().map(|t| t.text.as_str()).collect();
        // 起点升序，同一起点先短后长；"arrived" 开不了组
        assert_eq!(
            teksten,
            vec![
                "Felix",
                "Felix Ruiz",
                "Felix Ruiz arrived",
                "Ruiz",
                "Ruiz arrived",
            ]
        );
        assert_eq!(uit[0].span, Span::new(0, 5));
        assert_eq!(uit[1].span, Span::new(0, 10));
        assert_eq!(uit[3].span, Span::new(6, 10));
    }

    #[test]
    fn degenerate_invoer_geeft_lege_lijst() {
        assert!(tokens("").is_empty());
        assert!(tokens("the cat sat").is_empty());
        assert!(tokens("   \t \n ").is_empty());
    }

    #[test]
    fn kort_woord_stopt_het_groeien() {
        // "De" is korter dan 3: vanaf dat startpunt komt er niets,
        // ook niet het langere "De Smet"
        let teksten: Vec<String> = tokens("De Smet komt")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(teksten, vec!["Smet", "Smet komt"]);
    }

    #[test]
    fn niet_letter_opent_ook_een_groep() {
        // cijfers/leestekens gelden als "hoofdletter" (bewust behouden gedrag)
        let teksten: Vec<String> = tokens("3de Felix").into_iter().map(|t| t.text).collect();
        assert!(teksten.contains(&"3de".to_string()));
        assert!(teksten.contains(&"3de Felix".to_string()));
    }

    #[test]
    fn span_komt_overeen_met_de_brontekst() {
        let tekst = "  Willy\tVandersteen  schreef";
        for t in tokens(tekst) {
            assert_eq!(tekst[t.span.start..t.span.end].trim(), t.text);
        }
    }

    #[test]
    fn minimale_lengte_geldt_voor_elk_token() {
        for t in tokens("A Bo Cee Deee") {
            assert!(t.text.chars().count() >= 3, "te kort: {:?}", t.text);
        }
    }

    #[test]
    fn multibyte_namen_krijgen_juiste_spans() {
        let tekst = "Céline Müller aanwezig";
        let uit = tokens(tekst);
        let celine = uit.iter().find(|t| t.text == "Céline").unwrap();
        assert_eq!(&tekst[celine.span.start..celine.span.end], "Céline");
        let beide = uit.iter().find(|t| t.text == "Céline Müller").unwrap();
        assert_eq!(&tekst[beide.span.start..beide.span.end], "Céline Müller");
    }

    #[test]
    fn groepsgrootte_is_begrensd() {
        let uit = tokens("Aaa Bbb Ccc Ddd Eee Fff Ggg");
        let langste = uit.iter().map(|t| t.text.split(' ').count()).max().unwrap();
        assert_eq!(langste, 5);
        // clamp: geen dubbel uitgezonden staartgroepen
        let mut spans: Vec<Span> = uit.iter().map(|t| t.span).collect();
        let n = spans.len();
        spans.dedup();
        assert_eq!(spans.len(), n);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Naam(&'static str, &'static str);

    impl Kandidaat for Naam {
        fn id(&self) -> &str {
            self.0
        }
        fn voornaam(&self) -> Option<&str> {
            Some(self.0)
        }
        fn achternaam(&self) -> Option<&str> {
            Some(self.1)
        }
        fn volledige_naam(&self) -> Option<String> {
            Some(format!("{} {}", self.0, self.1))
        }
    }

    /// 端到端：完整管线在真实切分器上复现标准示例。
    #[test]
    fn pijplijn_felix_ruiz_op_origin_100() {
        let engine = Engine::new(NaamTokenizer::new());
        let mut ctx = ScanContext::new();
        ctx.vul(vec![Naam("Felix", "Ruiz"), Naam("Felix", "Decock")]);

        let hints = engine
            .generate_hints("Felix Ruiz arrived", 100, &mut ctx)
            .unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].absolute_span, Span::new(100, 110));
        assert_eq!(hints[0].matches, vec![Naam("Felix", "Ruiz")]);

        // 幂等：零命中缓存在第二遍被用到，输出不变
        let nogmaals = engine
            .generate_hints("Felix Ruiz arrived", 100, &mut ctx)
            .unwrap();
        assert_eq!(hints, nogmaals);
    }

    /// 归约后任何 hint 的 span 都不被另一个严格包含。
    #[test]
    fn geen_ingesloten_spans_na_reductie() {
        let engine = Engine::new(NaamTokenizer::new());
        let mut ctx = ScanContext::new();
        ctx.vul(vec![
            Naam("Felix", "Ruiz"),
            Naam("Marie", "Claes"),
            Naam("Ruiz", "Vermeulen"),
        ]);
        let hints = engine
            .generate_hints("Felix Ruiz sprak met Marie Claes", 0, &mut ctx)
            .unwrap();
        for a in &hints {
            for b in &hints {
                assert!(!a.span.bevat_in(b.span));
            }
        }
    }
}
