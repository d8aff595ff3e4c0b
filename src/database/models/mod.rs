pub mod activity;
pub mod auth;
pub mod common;
pub mod discipline;
pub mod event;
pub mod league;
pub mod news;
pub mod page;
pub mod role;
pub mod sponsor;
pub mod staff_role;
pub mod team;
pub mod token;
pub mod user;

pub use activity::{actions, ActivityLog, CreateActivityInput};
pub use auth::{AuthResponse, ForgotPasswordInput, LoginInput, RegisterInput, ResetPasswordInput};
pub use common::{Locale, Localized, UserStatus};
pub use discipline::{Discipline, DisciplineInput};
pub use event::{Event, EventInput};
pub use league::{
    League, LeagueInput, LeaguePointsInput, LeagueResponse, LeagueStanding, LeagueTeamInput,
};
pub use news::{News, NewsInput};
pub use page::{Page, PageInput};
pub use role::Role;
pub use sponsor::{Sponsor, SponsorInput};
pub use staff_role::{StaffRole, StaffRoleInput};
pub use team::{Team, TeamInput, TeamMemberInput, TeamResponse, TeamStaffInput};
pub use token::{ApiToken, PasswordResetToken};
pub use user::{UpdateUserInput, User, UserResponse};
