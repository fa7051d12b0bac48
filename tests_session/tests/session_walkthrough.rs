//! End-to-End Session Walkthrough
//!
//! Drives a full terminal visit through key events alone: banner,
//! filesystem exploration, the docker challenge and exit.

use challenges::ChallengeStatus;
use term_core::SessionOutcome;
use tests_session::{boot_challenge_session, boot_session, run_and_capture, type_line};
use vfs::HOME_DIR;

/// Test: the welcome banner fills the first six log entries
///
/// Validates the fixed boot sequence a fresh session renders before any
/// input arrives.
#[test]
fn test_banner_fills_first_six_entries() {
    let (session, _) = boot_session();

    let lines = session.output().to_vec();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "<span style=\"color: #ff9933; font-size: 1.2em;\">Terminal de PixxelOps v1.0.0</span>"
    );
    assert_eq!(lines[1], "==================================");
    assert!(lines[2].contains("para ver los comandos disponibles"));
    assert!(lines[3].contains("para ver las instrucciones del desafío actual"));
    assert!(lines[4].contains("NOTA: Asegúrate de tener Docker instalado"));
    assert_eq!(lines[5], "");
}

/// Test: navigating and reading the seeded disk
///
/// Validates ls styling, cd (including `..` and bare cd), cat and pwd
/// against the shipped filesystem.
#[test]
fn test_filesystem_exploration() {
    let (mut session, _) = boot_session();
    assert_eq!(session.cwd(), HOME_DIR);

    let ls = run_and_capture(&mut session, "ls");
    assert_eq!(ls.len(), 3);
    assert_eq!(
        ls[1],
        "<span style=\"color: #33de5e;\">documentos/</span>  <span style=\"color: #33de5e;\">proyectos/</span>  "
    );

    type_line(&mut session, "cd documentos");
    assert_eq!(session.cwd(), "/home/admin/documentos");

    let cat = run_and_capture(&mut session, "cat readme.txt");
    assert_eq!(cat[1], "Bienvenido a PixxelOps! Este es tu espacio de trabajo.");

    type_line(&mut session, "cd ..");
    let pwd = run_and_capture(&mut session, "pwd");
    assert_eq!(pwd[1], "/home/admin");

    // Bare cd returns home from anywhere.
    type_line(&mut session, "cd /var/log");
    type_line(&mut session, "cd");
    assert_eq!(session.cwd(), HOME_DIR);
}

/// Test: error lines echo the argument as typed
///
/// Validates the Spanish diagnostics for missing paths, wrong node
/// kinds and unknown commands.
#[test]
fn test_error_diagnostics_echo_the_argument() {
    let (mut session, _) = boot_session();

    let ls = run_and_capture(&mut session, "ls misterio");
    assert_eq!(
        ls[1],
        "ls: no se puede acceder a 'misterio': No existe el fichero o el directorio"
    );

    let cd = run_and_capture(&mut session, "cd /etc/config.conf");
    assert_eq!(cd[1], "cd: /etc/config.conf: No es un directorio");

    let cat = run_and_capture(&mut session, "cat /var");
    assert_eq!(cat[1], "cat: /var: Es un directorio");

    let unknown = run_and_capture(&mut session, "sudo reboot");
    assert_eq!(unknown[1], "sudo: comando no encontrado");
}

/// Test: the help screen lists every built-in
#[test]
fn test_help_lists_every_builtin() {
    let (mut session, _) = boot_session();
    let help = run_and_capture(&mut session, "help");

    assert_eq!(help[1], "Comandos disponibles:");
    for name in ["help", "ls", "cd", "pwd", "cat", "clear", "docker", "challenge", "exit"] {
        assert!(
            help.iter().any(|line| line.contains(name)),
            "help output missing {}",
            name
        );
    }
}

/// Test: the docker challenge from activation to exit
///
/// Validates the full winning path: instructions exist, pull, run with
/// port mapping, award, populated ps, and the exit outcome carrying the
/// completion flag.
#[test]
fn test_docker_challenge_walkthrough() {
    let (mut session, progress) = boot_challenge_session("docker-basic");
    assert_eq!(session.challenge_status(), ChallengeStatus::Active);
    assert!(session.active_challenge().is_some());

    let pull = run_and_capture(&mut session, "docker pull nginx");
    assert_eq!(pull[1], "Descargando imagen 'nginx'...");
    assert_eq!(pull[2], "La imagen ha sido descargada con éxito.");

    let run = run_and_capture(&mut session, "docker run -p 80:80 nginx");
    assert_eq!(run[1], "Creando contenedor a partir de la imagen 'nginx'...");
    assert_eq!(run[3], "El servidor web Nginx está funcionando en http://localhost:80");
    assert!(run[4].contains("¡Felicidades!"));
    assert!(run[5].contains("+100 puntos"));

    assert_eq!(session.challenge_status(), ChallengeStatus::Completed);
    assert_eq!(progress.score(), 100);

    let ps = run_and_capture(&mut session, "docker ps");
    assert!(ps[2].starts_with("abc123def456   nginx"));

    let outcome = type_line(&mut session, "exit");
    assert_eq!(
        outcome,
        SessionOutcome::ExitRequested {
            challenge_completed: true
        }
    );
    assert!(session.ended());
}

/// Test: challenge command round trip
///
/// Validates that `challenge` raises the instructions view and that the
/// acknowledge hint lands in the log afterwards.
#[test]
fn test_challenge_command_reopens_instructions() {
    let (mut session, _) = boot_challenge_session("docker-basic");

    let outcome = type_line(&mut session, "challenge");
    assert_eq!(outcome, SessionOutcome::InstructionsRequested);

    session.acknowledge_instructions();
    let lines = session.output().to_vec();
    assert!(lines[lines.len() - 2].contains("Puedes ver las instrucciones en cualquier momento"));
}
