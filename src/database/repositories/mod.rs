pub mod activity;
pub mod api_token;
pub mod discipline;
pub mod event;
pub mod league;
pub mod news;
pub mod page;
pub mod password_reset;
pub mod role;
pub mod sponsor;
pub mod staff_role;
pub mod team;
pub mod user;

pub use activity::ActivityRepository;
pub use api_token::ApiTokenRepository;
pub use discipline::DisciplineRepository;
pub use event::EventRepository;
pub use league::LeagueRepository;
pub use news::NewsRepository;
pub use page::PageRepository;
pub use password_reset::PasswordResetTokenRepository;
pub use role::RoleRepository;
pub use sponsor::SponsorRepository;
pub use staff_role::StaffRoleRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
