use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use naamhint_core::engine::Engine;
use naamhint_plugin::{ContextKind, PluginService, ScanRegio, ScanVerzoek, VerzamelSink};
use naamhint_store::VasteBron;
use naamhint_token::NaamTokenizer;
use tracing_subscriber::EnvFilter;

const WHO: &str = "editor-plugins/mandataris-card";
const DEMO_SCOPE: &str = "http://data.lblod.info/id/bestuursorganen/demo";

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dict_path = parse_args().unwrap_or_else(default_dict_path);
    let bron = VasteBron::from_path(&dict_path)?;
    let engine = Engine::new(NaamTokenizer::new());
    let sink = VerzamelSink::new();
    let service = PluginService::new(WHO, engine, bron, sink.clone());

    repl(&service, &sink, &dict_path).await
}

fn parse_args() -> Option<PathBuf> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--dict" {
            if let Some(p) = args.next() {
                return Some(PathBuf::from(p));
            }
        }
        if a == "--help" || a == "-h" {
            print_help();
        }
    }
    None
}

fn print_help() -> ! {
    println!(
        "用法：naamhint_cli [--dict <path>]\n交互：输入一行文本并回车，扫描其中的 mandataris 名字并列出建议卡片；输入 :q 退出"
    );
    std::process::exit(0);
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("asset")
        .join("mandatarissen.tsv")
}

async fn repl(
    service: &PluginService<NaamTokenizer, VasteBron, VerzamelSink>,
    sink: &VerzamelSink,
    dict_path: &PathBuf,
) -> anyhow::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    let mut volgnummer: usize = 0;
    writeln!(out, "naamhint demo | dict: {}", dict_path.display())?;
    writeln!(out, "输入一行文本后回车。输入 :q 退出。")?;
    (&mut out).flush()?;

    loop {
        (&mut line).clear();
        print!("tekst> ");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let invoer = line.trim_end_matches(['\r', '\n']);
        if invoer.trim().is_empty() {
            continue;
        }
        if invoer == ":q" || invoer == ":quit" || invoer == ":exit" {
            break;
        }

        volgnummer += 1;
        sink.leeg();
        let verzoek = ScanVerzoek {
            batch: format!("batch-{volgnummer}"),
            scope: Some(DEMO_SCOPE.to_string()),
            regios: vec![ScanRegio {
                tekst: invoer.to_string(),
                origin: 0,
                type_uri: ContextKind::Zitting.uri().to_string(),
            }],
            triggered_by: None,
        };
        service.execute(verzoek).await?;

        let cards = sink.cards();
        if cards.is_empty() {
            writeln!(out, "(geen hints)")?;
            continue;
        }
        for (i, card) in cards.iter().enumerate() {
            let span = card.absolute_span;
            let naam = card
                .kandidaat
                .persoon
                .volledige_naam()
                .unwrap_or_else(|| "(naamloos)".to_string());
            let functie = card
                .kandidaat
                .mandaat
                .as_ref()
                .map(|m| m.bestuursfunctie.as_str())
                .unwrap_or("-");
            writeln!(
                out,
                "{}. [{}..{}] {} ({})\t{} -> {}",
                i + 1,
                span.start,
                span.end,
                naam,
                functie,
                card.kind.predikaat(),
                card.kandidaat.uri,
            )?;
        }
    }

    Ok(())
}
