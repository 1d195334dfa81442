pub mod crew_member;
pub mod movie;
pub mod review;
pub mod worker;
