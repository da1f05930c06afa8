//! 上下文种类：封闭枚举取代“类型 URI 字符串 -> 闭包”的动态分发。

use naamhint_core::kandidaat::Kandidaat;
use naamhint_core::model::{Hint, Span};

/// 文档上下文种类（决定 card 携带的 RDFa property 谓词）。
///
/// 只有这三种上下文会触发扫描；其他类型 URI 一律跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    OntslagBesluit,
    AanstellingsBesluit,
    Zitting,
}

impl ContextKind {
    pub const ALLE: [ContextKind; 3] = [
        ContextKind::OntslagBesluit,
        ContextKind::AanstellingsBesluit,
        ContextKind::Zitting,
    ];

    /// 类型 URI -> kind；未知 URI 给 `None`（该上下文不扫描）。
    pub fn van_uri(uri: &str) -> Option<Self> {
        match uri.trim() {
            "http://data.vlaanderen.be/ns/mandaat#OntslagBesluit" => Some(Self::OntslagBesluit),
            "http://data.vlaanderen.be/ns/mandaat#AanstellingsBesluit" => {
                Some(Self::AanstellingsBesluit)
            }
            "http://data.vlaanderen.be/ns/besluit#Zitting" => Some(Self::Zitting),
            _ => None,
        }
    }

    /// 该种类自己的类型 URI。
    pub fn uri(self) -> &'static str {
        match self {
            Self::OntslagBesluit => "http://data.vlaanderen.be/ns/mandaat#OntslagBesluit",
            Self::AanstellingsBesluit => {
                "http://data.vlaanderen.be/ns/mandaat#AanstellingsBesluit"
            }
            Self::Zitting => "http://data.vlaanderen.be/ns/besluit#Zitting",
        }
    }

    /// card 上的 RDFa property 谓词（宿主负责真正的模板渲染）。
    pub fn predikaat(self) -> &'static str {
        match self {
            Self::OntslagBesluit => "mandaat:bekrachtigtOntslagVan",
            Self::AanstellingsBesluit => "mandaat:bekrachtigtAanstellingVan",
            Self::Zitting => "besluit:heeftAanwezigeBijStart",
        }
    }

    /// 一个 hint 扇出成 N 张 card：每个命中一张，同一 absolute span。
    pub fn bouw_cards<K: Kandidaat>(self, hint: &Hint<K>) -> Vec<Card<K>> {
        hint.matches
            .iter()
            .cloned()
            .map(|kandidaat| Card {
                absolute_span: hint.absolute_span,
                kandidaat,
                kind: self,
            })
            .collect()
    }
}

/// 一张建议卡片：hint 位置 × 单个候选。
#[derive(Debug, Clone, PartialEq)]
pub struct Card<K> {
    /// 文档坐标系里的位置
    pub absolute_span: Span,
    pub kandidaat: K,
    pub kind: ContextKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_rondje() {
        for kind in ContextKind::ALLE {
            assert_eq!(ContextKind::van_uri(kind.uri()), Some(kind));
        }
        assert_eq!(ContextKind::van_uri("http://example.org/onzin"), None);
        // trimmen hoort bij de lookup
        assert_eq!(
            ContextKind::van_uri("  http://data.vlaanderen.be/ns/besluit#Zitting "),
            Some(ContextKind::Zitting)
        );
    }

    #[test]
    fn predikaat_per_soort() {
        assert_eq!(
            ContextKind::OntslagBesluit.predikaat(),
            "mandaat:bekrachtigtOntslagVan"
        );
        assert_eq!(
            ContextKind::Zitting.predikaat(),
            "besluit:heeftAanwezigeBijStart"
        );
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Naam(&'static str);

    impl Kandidaat for Naam {
        fn id(&self) -> &str {
            self.0
        }
        fn voornaam(&self) -> Option<&str> {
            Some(self.0)
        }
        fn achternaam(&self) -> Option<&str> {
            None
        }
        fn volledige_naam(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn hint_waaiert_uit_per_match() {
        let hint = Hint {
            span: Span::new(0, 10),
            absolute_span: Span::new(100, 110),
            matches: vec![Naam("Felix"), Naam("Felicia")],
        };
        let cards = ContextKind::Zitting.bouw_cards(&hint);
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.absolute_span == Span::new(100, 110)));
        assert!(cards.iter().all(|c| c.kind == ContextKind::Zitting));
    }
}
