//! Sessions driven through the console front end

use detective_quest::console::{Console, PROMPT};
use detective_quest::{InvestigationSession, ReportGenerator, RoomMap};
use std::io::Cursor;

fn play(input: &str, quiet: bool) -> (String, Vec<String>) {
    let map = RoomMap::build().unwrap();
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new()).quiet(quiet);
    let mut session = InvestigationSession::new(&map);
    session.run(&mut console);
    assert!(console.take_error().is_none());

    let lines = ReportGenerator::for_session(&session).lines();
    console.report(&lines).unwrap();
    (String::from_utf8(console.into_inner()).unwrap(), lines)
}

#[test]
fn typed_session_reaches_the_attic() {
    let (screen, lines) = play("d\nD extra words\ns\n", false);

    assert_eq!(screen.matches(PROMPT).count(), 3);
    assert!(screen.contains("Pista: Um mapa incompleto do bairro."));
    assert!(screen.contains("Saindo da sala..."));
    assert!(lines.contains(&"SUSPEITO MAIS PROVAVEL: Vizinho (com 2 pistas associadas).".to_string()));
}

#[test]
fn end_of_input_is_a_stop() {
    let (screen, lines) = play("e\n", true);

    assert!(!screen.contains(PROMPT));
    assert!(screen.contains("Pista: Um bilhete rasgado sob o sofa."));
    assert!(lines.contains(&"Suspeito: Mordomo (Pistas: 1)".to_string()));
}

#[test]
fn unknown_key_is_announced() {
    let (screen, _) = play("x\n", true);
    assert!(screen.contains("Acao desconhecida 'x'"));
    assert!(screen.contains("--- Fim da Investigacao ---"));
}

#[test]
fn wall_message_then_continue() {
    let (screen, _) = play("e\ne\ne\ns\n", true);
    assert_eq!(screen.matches("Nao ha saida nessa direcao.").count(), 1);
    assert_eq!(screen.matches("--- PISTA ENCONTRADA ---").count(), 3);
}
