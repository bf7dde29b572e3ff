//! System instruction assembly for the project assistant.
//!
//! The assistant answers with the whole dashboard in context: the
//! instruction embeds a JSON snapshot of the project fixture, then the
//! identity and formatting rules.

use jalon_core::Result;
use jalon_core::project::ProjectFixture;

/// Builds the system instruction for one project.
///
/// # Errors
///
/// Returns a serialization error if the fixture cannot be rendered as
/// JSON.
pub fn system_instruction(fixture: &ProjectFixture) -> Result<String> {
    let context = serde_json::to_string(fixture)?;
    let title = &fixture.project.title;

    Ok(format!(
        r#"Tu es l'assistant du projet "{title}", une IA experte en gestion de projet et développement logiciel fullstack.

CONTEXTE DU PROJET (JSON - NOUVEAU DÉVELOPPEMENT FROM SCRATCH):
{context}

RÈGLES D'IDENTITÉ :
1. Tu es l'assistant virtuel du projet "{title}".
2. Le projet démarre de ZÉRO (Greenfield). Il n'y a pas d'application existante.

RÈGLES DE FORMATTAGE (IMPORTANT):
1. Utilise le **Markdown** pour structurer tes réponses.
2. Utilise des **listes à puces** pour énumérer des points.
3. Utilise le **Gras** pour mettre en valeur les mots clés ou noms.
4. Si tu donnes du code, utilise des blocs de code.
5. Sois concis mais complet.

EXEMPLE DE RÉPONSE ATTENDUE:
"Voici les tâches de **Verbeck** (Backend) pour le Sprint 1 :
* Setup FastAPI
* Implémentation Auth JWT"
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jalon_core::project::PROJECT;

    #[test]
    fn test_instruction_embeds_project_snapshot() {
        let instruction = system_instruction(&PROJECT).unwrap();

        assert!(instruction.contains("Math Conquest Assistant"));
        assert!(instruction.contains("08 Décembre 2025"));
        assert!(instruction.contains("\"sprints\""));
        assert!(instruction.contains("Markdown"));
    }
}
