//! Contract ABI definitions using alloy's `sol!` macro.

use alloy::sol;

sol! {
    /// ERC-20 token interface (read-only subset plus events).
    #[sol(rpc)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function totalSupply() external view returns (uint256);
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}

sol! {
    /// Single-owner access control (`Ownable`).
    interface IOwnable {
        function owner() external view returns (address);
    }
}
