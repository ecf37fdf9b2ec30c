use crate::{self as pallet_node_token, Role};
use frame_support::{derive_impl, instances::Instance2};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

/// Holds all three roles on `Token`, like a fresh deployment.
pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

/// `SecondToken` splits the roles and lets the pauser administer minters.
pub const SECOND_ADMIN: u64 = 10;
pub const SECOND_MINTER: u64 = 11;
pub const SECOND_PAUSER: u64 = 12;

// Configure a mock runtime with two independent ledgers.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Token: pallet_node_token,
        SecondToken: pallet_node_token::<Instance2>,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
}

impl pallet_node_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

impl pallet_node_token::Config<Instance2> for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_node_token::GenesisConfig::<Test> {
        token_name: b"Node".to_vec(),
        token_symbol: b"NODE".to_vec(),
        decimals: 18,
        admin: Some(ADMIN),
        minter: Some(ADMIN),
        pauser: Some(ADMIN),
        role_admins: vec![],
        phantom: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_node_token::GenesisConfig::<Test, Instance2> {
        token_name: b"Second".to_vec(),
        token_symbol: b"SEC".to_vec(),
        decimals: 6,
        admin: Some(SECOND_ADMIN),
        minter: Some(SECOND_MINTER),
        pauser: Some(SECOND_PAUSER),
        role_admins: vec![(Role::Minter, Role::Pauser)],
        phantom: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
