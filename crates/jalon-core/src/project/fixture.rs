//! The hard-coded dashboard content.

use once_cell::sync::Lazy;

use super::{
    ProjectFixture, ProjectInfo, Risk, Sprint, SprintTask, StatusItem, SuccessMetric, TeamMember,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The complete project content, fixed at build time.
pub static PROJECT: Lazy<ProjectFixture> = Lazy::new(|| ProjectFixture {
    project: ProjectInfo {
        title: "Math Conquest Assistant".to_string(),
        subtitle: "Plan d'Action & Stratégie de Déploiement".to_string(),
        start_date: "08 Décembre 2025".to_string(),
        end_date: "30 Décembre 2025".to_string(),
        duration: "22 jours (3 semaines)".to_string(),
    },
    current_state: vec![
        StatusItem {
            label: "App Fonctionnelle".to_string(),
            desc: "Frontend + Backend opérationnels".to_string(),
        },
        StatusItem {
            label: "Vision IA".to_string(),
            desc: "Extraction LaTeX via OpenAI".to_string(),
        },
        StatusItem {
            label: "Résolution".to_string(),
            desc: "Intégration WolframAlpha".to_string(),
        },
        StatusItem {
            label: "Pédagogie".to_string(),
            desc: "Explications étape par étape".to_string(),
        },
        StatusItem {
            label: "Chat".to_string(),
            desc: "Interactif & Contextuel".to_string(),
        },
        StatusItem {
            label: "Export".to_string(),
            desc: "Génération PDF fonctionnelle".to_string(),
        },
    ],
    objectives: strings(&[
        "Implémenter l'authentification et la gestion de données (Supabase)",
        "Migrer l'historique vers une base de données cloud",
        "Optimiser et sécuriser l'application existante",
        "Tests exhaustifs (QA/E2E)",
        "Déploiement Production (Render/Netlify/Vercel)",
        "Documentation complète & Vidéo démo",
    ]),
    sprints: vec![
        Sprint {
            id: 1,
            title: "SPRINT 1 : Finalisation & Tests".to_string(),
            dates: "08 - 15 Décembre".to_string(),
            duration: "8 jours".to_string(),
            tasks: vec![
                SprintTask {
                    days: "J1-J2".to_string(),
                    title: "Audit & Config".to_string(),
                    items: strings(&[
                        "Config GitHub (Repos, Branches, Projects)",
                        "Audit complet de l'app existante",
                        "Définition standards de code (Git Flow)",
                    ]),
                },
                SprintTask {
                    days: "J3-J4".to_string(),
                    title: "Backend & DB".to_string(),
                    items: strings(&[
                        "Setup Supabase (Auth, Tables, RLS)",
                        "Middleware Python & Token verify",
                        "Migration Schema DB",
                    ]),
                },
                SprintTask {
                    days: "J5-J6".to_string(),
                    title: "Frontend Auth".to_string(),
                    items: strings(&[
                        "Intégration @supabase/js",
                        "Pages Login/Register/Profile",
                        "Migration LocalStorage -> Cloud",
                    ]),
                },
                SprintTask {
                    days: "J7-J8".to_string(),
                    title: "QA & Fixes".to_string(),
                    items: strings(&[
                        "Tests E2E & Unitaires",
                        "Optimisation Prompts OpenAI",
                        "Correction bugs critiques",
                    ]),
                },
            ],
        },
        Sprint {
            id: 2,
            title: "SPRINT 2 : Déploiement & Docs".to_string(),
            dates: "16 - 23 Décembre".to_string(),
            duration: "8 jours".to_string(),
            tasks: vec![
                SprintTask {
                    days: "J9-J10".to_string(),
                    title: "Pré-Prod".to_string(),
                    items: strings(&[
                        "Config CI/CD GitHub Actions",
                        "Env Variables & Sécurité",
                        "Build optimization",
                    ]),
                },
                SprintTask {
                    days: "J11-J12".to_string(),
                    title: "Déploiement".to_string(),
                    items: strings(&[
                        "Backend -> Render/Railway",
                        "Frontend -> Netlify/Vercel",
                        "Tests en production (SSL, CORS)",
                    ]),
                },
                SprintTask {
                    days: "J13-J14".to_string(),
                    title: "Documentation".to_string(),
                    items: strings(&[
                        "README complet & Wiki",
                        "Documentation API & Composants",
                        "Guide Utilisateur",
                    ]),
                },
                SprintTask {
                    days: "J15-J16".to_string(),
                    title: "Stabilisation".to_string(),
                    items: strings(&["Tests finaux production", "Retrospective Sprint 2"]),
                },
            ],
        },
        Sprint {
            id: 3,
            title: "SPRINT 3 : Livraison & Demo".to_string(),
            dates: "24 - 30 Décembre".to_string(),
            duration: "7 jours".to_string(),
            tasks: vec![
                SprintTask {
                    days: "J17-J19".to_string(),
                    title: "Préparation".to_string(),
                    items: strings(&[
                        "Script de présentation",
                        "Scénarios de démo",
                        "Screenshots finaux",
                    ]),
                },
                SprintTask {
                    days: "J20-J22".to_string(),
                    title: "Vidéo Démo".to_string(),
                    items: strings(&[
                        "Enregistrement parcours utilisateur",
                        "Montage vidéo (3-5 min)",
                        "Mise en avant 'Wow Factor'",
                    ]),
                },
                SprintTask {
                    days: "J23".to_string(),
                    title: "Livraison".to_string(),
                    items: strings(&[
                        "Package final",
                        "Tag version v1.0.0",
                        "Présentation finale",
                    ]),
                },
            ],
        },
    ],
    team: vec![
        TeamMember {
            name: "Dekens".to_string(),
            role: "Chef de Projet / Scrum Master".to_string(),
            initials: "DK".to_string(),
            tasks: strings(&["Coordination", "Planning", "Vidéo Démo", "Communication"]),
        },
        TeamMember {
            name: "Israêl".to_string(),
            role: "Lead Dev / Architecte".to_string(),
            initials: "IS".to_string(),
            tasks: strings(&[
                "Architecture DB",
                "Supabase Setup",
                "Code Review",
                "Sécurité RLS",
            ]),
        },
        TeamMember {
            name: "Verbeck".to_string(),
            role: "Backend Dev".to_string(),
            initials: "VB".to_string(),
            tasks: strings(&[
                "API Python",
                "Middleware Auth",
                "Optimisation",
                "Migration Data",
            ]),
        },
        TeamMember {
            name: "Thibaut".to_string(),
            role: "Frontend Dev".to_string(),
            initials: "TH".to_string(),
            tasks: strings(&[
                "React Components",
                "Pages Auth",
                "UI/UX",
                "Integration Supabase",
            ]),
        },
        TeamMember {
            name: "Sarah".to_string(),
            role: "QA / DevOps".to_string(),
            initials: "SA".to_string(),
            tasks: strings(&[
                "Tests E2E",
                "CI/CD",
                "Déploiement Prod",
                "Documentation",
            ]),
        },
    ],
    risks: vec![
        Risk {
            title: "Déploiement".to_string(),
            risk: "Problèmes config prod".to_string(),
            mitigation: "Tests précoce (J9)".to_string(),
            owner: "Sarah".to_string(),
        },
        Risk {
            title: "Qualité".to_string(),
            risk: "Bugs critiques tardifs".to_string(),
            mitigation: "Tests exhaustifs S1".to_string(),
            owner: "Sarah/Team".to_string(),
        },
        Risk {
            title: "Planning".to_string(),
            risk: "Retards tâches".to_string(),
            mitigation: "Daily Stand-ups".to_string(),
            owner: "Dekens".to_string(),
        },
        Risk {
            title: "Technique".to_string(),
            risk: "Limites API/Auth".to_string(),
            mitigation: "POC rapide J3-J5".to_string(),
            owner: "Israêl/Verbeck".to_string(),
        },
    ],
    metrics: vec![
        SuccessMetric {
            label: "Auth Backend".to_string(),
            value: "100%".to_string(),
            detail: "JWT & Bcrypt".to_string(),
        },
        SuccessMetric {
            label: "DB Schema".to_string(),
            value: "Validé".to_string(),
            detail: "PostgreSQL".to_string(),
        },
        SuccessMetric {
            label: "Temps API".to_string(),
            value: "< 5s".to_string(),
            detail: "Cible Latence".to_string(),
        },
        SuccessMetric {
            label: "Déploiement".to_string(),
            value: "Prod".to_string(),
            detail: "Dispo 30 Déc".to_string(),
        },
        SuccessMetric {
            label: "Tests E2E".to_string(),
            value: "100%".to_string(),
            detail: "Couverture critique".to_string(),
        },
    ],
    tech_stack: "Backend: Python (FastAPI), SQLAlchemy, Alembic. Frontend: React, Vite, \
                 Tailwind. DB: PostgreSQL. Auth: JWT (Bcrypt). IA: OpenAI Vision, WolframAlpha."
        .to_string(),
});
